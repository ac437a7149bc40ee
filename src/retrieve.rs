use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::error::FetchError;
use crate::swf;
use crate::wayback::ArchiveClient;

/// Flashpoint's own launcher URLs; there is no host to fetch from.
pub const DEAD_URL_PREFIX: &str = "http://localflash";

/// Result of one retrieval attempt. Soft failures are data, not errors:
/// `NotFound` means the asset is genuinely absent (no source URL, no
/// capture, or the body was not a SWF), `TransientError` means a service
/// misbehaved and a later run might do better. Neither crosses a component
/// boundary as an `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Retrieval {
    Success(Vec<u8>),
    NotFound,
    TransientError,
}

pub trait DirectClient: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

#[derive(Clone)]
pub struct DirectHttpClient {
    client: Client,
}

impl DirectHttpClient {
    pub fn new() -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("flashfetch/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| FetchError::DirectHttp(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|err| FetchError::DirectHttp(err.to_string()))?;
        Ok(Self { client })
    }
}

impl DirectClient for DirectHttpClient {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!(url, "direct fetch");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| FetchError::DirectHttp(err.to_string()))?;
        if !response.status().is_success() {
            return Err(FetchError::DirectStatus {
                status: response.status().as_u16(),
            });
        }
        let bytes = response
            .bytes()
            .map_err(|err| FetchError::DirectHttp(err.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Three-tier retrieval: short-circuit on unusable URLs, then direct GET,
/// then the archive lookup-and-fetch path. Each attempt must pass the SWF
/// header check before it counts.
pub fn retrieve<D, A>(direct: &D, archive: &A, source_url: Option<&str>) -> Retrieval
where
    D: DirectClient + ?Sized,
    A: ArchiveClient + ?Sized,
{
    let Some(url) = source_url else {
        return Retrieval::NotFound;
    };
    if url.is_empty() || url.starts_with(DEAD_URL_PREFIX) {
        return Retrieval::NotFound;
    }

    match direct.fetch(url) {
        Ok(bytes) if swf::is_valid_swf(&bytes) => return Retrieval::Success(bytes),
        Ok(_) => debug!(url, "direct fetch returned a non-SWF body"),
        Err(err) => debug!(url, %err, "direct fetch failed"),
    }

    let snapshot = match archive.latest_snapshot(url) {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => return Retrieval::NotFound,
        Err(err) => {
            debug!(url, %err, "cdx lookup failed");
            return Retrieval::TransientError;
        }
    };
    match archive.fetch_snapshot(&snapshot, url) {
        Ok(bytes) if swf::is_valid_swf(&bytes) => Retrieval::Success(bytes),
        Ok(_) => Retrieval::NotFound,
        Err(err) => {
            debug!(url, %err, "snapshot fetch failed");
            Retrieval::TransientError
        }
    }
}
