use std::thread;
use std::time::Duration;

use serde::Serialize;

use crate::domain::{GameSlug, Outcome};
use crate::error::FetchError;
use crate::flashpoint::{self, CatalogClient};
use crate::retrieve::{self, DirectClient, Retrieval};
use crate::store::Store;
use crate::wayback::ArchiveClient;

#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub message: String,
}

pub trait ProgressSink {
    fn event(&self, event: ProgressEvent);
}

/// End-of-run report: the slugs behind each outcome, in processing order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub retrieved: Vec<String>,
    pub already_present: Vec<String>,
    pub unresolved: Vec<String>,
}

impl Summary {
    fn record(&mut self, slug: &GameSlug, outcome: Outcome) {
        let list = match outcome {
            Outcome::Retrieved => &mut self.retrieved,
            Outcome::AlreadyPresent => &mut self.already_present,
            Outcome::Unresolved => &mut self.unresolved,
        };
        list.push(slug.as_str().to_string());
    }
}

/// Sequential batch orchestrator. Generic over the three client seams so
/// tests can substitute mocks; production wires the blocking HTTP clients.
#[derive(Clone)]
pub struct App<C: CatalogClient, D: DirectClient, A: ArchiveClient> {
    store: Store,
    catalog: C,
    direct: D,
    archive: A,
    delay: Duration,
}

impl<C: CatalogClient, D: DirectClient, A: ArchiveClient> App<C, D, A> {
    pub fn new(store: Store, catalog: C, direct: D, archive: A, delay: Duration) -> Self {
        Self {
            store,
            catalog,
            direct,
            archive,
            delay,
        }
    }

    /// Processes every slug in list order. A slug that cannot be resolved or
    /// retrieved is reported, never fatal; only storage errors abort the run,
    /// since without a writable games directory no progress is possible.
    pub fn run(&self, games: &[GameSlug], sink: &dyn ProgressSink) -> Result<Summary, FetchError> {
        self.store.ensure_root()?;

        let total = games.len();
        let mut summary = Summary::default();
        for (index, slug) in games.iter().enumerate() {
            sink.event(ProgressEvent {
                message: format!("[{}/{total}] {slug}", index + 1),
            });
            let outcome = self.fetch_game(slug, sink)?;
            summary.record(slug, outcome);
            // Skipped slugs touched no service, so they earn no delay.
            if outcome != Outcome::AlreadyPresent && index + 1 < total {
                thread::sleep(self.delay);
            }
        }
        Ok(summary)
    }

    fn fetch_game(&self, slug: &GameSlug, sink: &dyn ProgressSink) -> Result<Outcome, FetchError> {
        if self.store.contains(slug) {
            sink.event(ProgressEvent {
                message: "already downloaded, skipping".to_string(),
            });
            return Ok(Outcome::AlreadyPresent);
        }

        let title = slug.search_title();
        sink.event(ProgressEvent {
            message: format!("searching Flashpoint for: {title}"),
        });
        let Some(record) = flashpoint::resolve(&self.catalog, &title) else {
            sink.event(ProgressEvent {
                message: "not found on Flashpoint".to_string(),
            });
            return Ok(Outcome::Unresolved);
        };
        sink.event(ProgressEvent {
            message: format!("match: \"{}\" ({})", record.title, record.platform),
        });

        match retrieve::retrieve(&self.direct, &self.archive, record.launch_command.as_deref()) {
            Retrieval::Success(bytes) => {
                let path = self.store.write_asset(slug, &bytes)?;
                sink.event(ProgressEvent {
                    message: format!("saved {path} ({} KB)", bytes.len() / 1024),
                });
                Ok(Outcome::Retrieved)
            }
            Retrieval::NotFound => {
                sink.event(ProgressEvent {
                    message: "could not retrieve .swf".to_string(),
                });
                Ok(Outcome::Unresolved)
            }
            Retrieval::TransientError => {
                sink.event(ProgressEvent {
                    message: "retrieval failed (service error), try again later".to_string(),
                });
                Ok(Outcome::Unresolved)
            }
        }
    }
}
