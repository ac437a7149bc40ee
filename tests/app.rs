use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use camino::Utf8PathBuf;

use flashfetch::app::App;
use flashfetch::domain::GameSlug;
use flashfetch::error::FetchError;
use flashfetch::flashpoint::{CatalogClient, CatalogRecord};
use flashfetch::output::SilentOutput;
use flashfetch::retrieve::DirectClient;
use flashfetch::store::Store;
use flashfetch::wayback::{ArchiveClient, Snapshot};

const SWF: &[u8] = b"FWS\x0a\x20\x00\x00\x00body";

#[derive(Default, Clone)]
struct MockCatalog {
    records: HashMap<String, Vec<CatalogRecord>>,
    calls: Arc<Mutex<usize>>,
}

impl CatalogClient for MockCatalog {
    fn search(&self, title: &str) -> Result<Vec<CatalogRecord>, FetchError> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.records.get(title).cloned().unwrap_or_default())
    }
}

#[derive(Default, Clone)]
struct MockDirect {
    bodies: HashMap<String, Vec<u8>>,
    calls: Arc<Mutex<usize>>,
}

impl DirectClient for MockDirect {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        *self.calls.lock().unwrap() += 1;
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::DirectStatus { status: 404 })
    }
}

#[derive(Default, Clone)]
struct MockArchive {
    snapshot: Option<(Snapshot, Vec<u8>)>,
    calls: Arc<Mutex<usize>>,
}

impl ArchiveClient for MockArchive {
    fn latest_snapshot(&self, _url: &str) -> Result<Option<Snapshot>, FetchError> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.snapshot.as_ref().map(|(snapshot, _)| snapshot.clone()))
    }

    fn fetch_snapshot(&self, _snapshot: &Snapshot, _url: &str) -> Result<Vec<u8>, FetchError> {
        *self.calls.lock().unwrap() += 1;
        match &self.snapshot {
            Some((_, body)) => Ok(body.clone()),
            None => Err(FetchError::WaybackHttp("no snapshot".to_string())),
        }
    }
}

fn record(title: &str, platform: &str, launch_command: &str) -> CatalogRecord {
    CatalogRecord {
        id: "1".to_string(),
        title: title.to_string(),
        platform: platform.to_string(),
        launch_command: Some(launch_command.to_string()),
    }
}

fn store_in(temp: &tempfile::TempDir) -> Store {
    let root = Utf8PathBuf::from_path_buf(temp.path().join("games")).unwrap();
    Store::new(root)
}

#[test]
fn mixed_batch_of_present_and_fetchable() {
    let temp = tempfile::tempdir().unwrap();
    let store = store_in(&temp);
    let x: GameSlug = "x".parse().unwrap();
    let y: GameSlug = "y".parse().unwrap();

    store.ensure_root().unwrap();
    std::fs::write(store.asset_path(&x).as_std_path(), SWF).unwrap();

    let mut catalog = MockCatalog::default();
    catalog.records.insert(
        "Y".to_string(),
        vec![record("Y", "Flash", "http://example.com/y.swf")],
    );
    let mut direct = MockDirect::default();
    direct
        .bodies
        .insert("http://example.com/y.swf".to_string(), SWF.to_vec());

    let app = App::new(
        store.clone(),
        catalog,
        direct,
        MockArchive::default(),
        Duration::ZERO,
    );
    let summary = app.run(&[x.clone(), y.clone()], &SilentOutput).unwrap();

    assert_eq!(summary.already_present, vec!["x"]);
    assert_eq!(summary.retrieved, vec!["y"]);
    assert!(summary.unresolved.is_empty());
    assert_eq!(
        std::fs::read(store.asset_path(&y).as_std_path()).unwrap(),
        SWF
    );
}

#[test]
fn second_run_is_idempotent_and_offline() {
    let temp = tempfile::tempdir().unwrap();
    let store = store_in(&temp);
    let slug: GameSlug = "fishy".parse().unwrap();

    let mut catalog = MockCatalog::default();
    catalog.records.insert(
        "Fishy".to_string(),
        vec![record("Fishy", "Flash", "http://example.com/fishy.swf")],
    );
    let mut direct = MockDirect::default();
    direct
        .bodies
        .insert("http://example.com/fishy.swf".to_string(), SWF.to_vec());
    let archive = MockArchive::default();

    let catalog_calls = catalog.calls.clone();
    let direct_calls = direct.calls.clone();
    let archive_calls = archive.calls.clone();

    let app = App::new(store, catalog, direct, archive, Duration::ZERO);
    let games = [slug];

    let first = app.run(&games, &SilentOutput).unwrap();
    assert_eq!(first.retrieved, vec!["fishy"]);
    assert_eq!(*catalog_calls.lock().unwrap(), 1);
    assert_eq!(*direct_calls.lock().unwrap(), 1);

    let second = app.run(&games, &SilentOutput).unwrap();
    assert_eq!(second.already_present, vec!["fishy"]);
    assert!(second.retrieved.is_empty());
    assert_eq!(*catalog_calls.lock().unwrap(), 1);
    assert_eq!(*direct_calls.lock().unwrap(), 1);
    assert_eq!(*archive_calls.lock().unwrap(), 0);
}

#[test]
fn invalid_bodies_everywhere_leave_no_file() {
    let temp = tempfile::tempdir().unwrap();
    let store = store_in(&temp);
    let slug: GameSlug = "tanks".parse().unwrap();

    let mut catalog = MockCatalog::default();
    catalog.records.insert(
        "Tanks".to_string(),
        vec![record("Tanks", "Flash", "http://example.com/tanks.swf")],
    );
    let mut direct = MockDirect::default();
    direct.bodies.insert(
        "http://example.com/tanks.swf".to_string(),
        b"<html>404</html>".to_vec(),
    );
    let archive = MockArchive {
        snapshot: Some((
            Snapshot {
                timestamp: "20080101000000".to_string(),
            },
            b"<html>blocked</html>".to_vec(),
        )),
        calls: Arc::default(),
    };

    let app = App::new(store.clone(), catalog, direct, archive, Duration::ZERO);
    let summary = app.run(&[slug.clone()], &SilentOutput).unwrap();

    assert_eq!(summary.unresolved, vec!["tanks"]);
    assert!(summary.retrieved.is_empty());
    assert!(!store.contains(&slug));
}

#[test]
fn unmatched_slug_is_unresolved_without_retrieval() {
    let temp = tempfile::tempdir().unwrap();
    let store = store_in(&temp);
    let slug: GameSlug = "run".parse().unwrap();

    let direct = MockDirect::default();
    let direct_calls = direct.calls.clone();

    let app = App::new(
        store,
        MockCatalog::default(),
        direct,
        MockArchive::default(),
        Duration::ZERO,
    );
    let summary = app.run(&[slug], &SilentOutput).unwrap();

    assert_eq!(summary.unresolved, vec!["run"]);
    assert_eq!(*direct_calls.lock().unwrap(), 0);
}
