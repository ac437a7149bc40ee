use std::fs;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};

use crate::domain::GameSlug;
use crate::error::FetchError;

/// Flat on-disk store: one `<slug>.swf` per game under a single directory.
/// File existence is the idempotency gate; a present file is never rewritten.
#[derive(Debug, Clone)]
pub struct Store {
    root: Utf8PathBuf,
}

impl Store {
    pub fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn asset_path(&self, slug: &GameSlug) -> Utf8PathBuf {
        self.root.join(format!("{slug}.swf"))
    }

    pub fn contains(&self, slug: &GameSlug) -> bool {
        self.asset_path(slug).as_std_path().exists()
    }

    pub fn ensure_root(&self) -> Result<(), FetchError> {
        fs::create_dir_all(self.root.as_std_path())
            .map_err(|err| FetchError::Filesystem(err.to_string()))
    }

    /// Writes through a temp file in the same directory so a crash mid-write
    /// never leaves a half-asset behind the idempotency check.
    pub fn write_asset(&self, slug: &GameSlug, data: &[u8]) -> Result<Utf8PathBuf, FetchError> {
        self.ensure_root()?;
        let path = self.asset_path(slug);
        let mut temp = tempfile::Builder::new()
            .prefix("flashfetch")
            .tempfile_in(self.root.as_std_path())
            .map_err(|err| FetchError::Filesystem(err.to_string()))?;
        temp.write_all(data)
            .map_err(|err| FetchError::Filesystem(err.to_string()))?;
        temp.persist(path.as_std_path())
            .map_err(|err| FetchError::Filesystem(err.to_string()))?;
        Ok(path)
    }
}
