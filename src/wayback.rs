use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::error::FetchError;

const WAYBACK_CDX: &str = "https://web.archive.org/cdx/search/cdx";
const WAYBACK_RAW: &str = "https://web.archive.org/web";

/// One successfully-captured (HTTP 200) snapshot of a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub timestamp: String,
}

pub trait ArchiveClient: Send + Sync {
    /// Most recent 200 capture of `url`, if the index knows one.
    fn latest_snapshot(&self, url: &str) -> Result<Option<Snapshot>, FetchError>;

    /// Raw bytes of a snapshot, without the Wayback HTML chrome.
    fn fetch_snapshot(&self, snapshot: &Snapshot, url: &str) -> Result<Vec<u8>, FetchError>;
}

#[derive(Clone)]
pub struct WaybackHttpClient {
    client: Client,
}

impl WaybackHttpClient {
    pub fn new() -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("flashfetch/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| FetchError::WaybackHttp(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(20))
            .build()
            .map_err(|err| FetchError::WaybackHttp(err.to_string()))?;
        Ok(Self { client })
    }
}

/// The `oe_` modifier asks Wayback for the original bytes of the capture.
pub fn raw_url(snapshot: &Snapshot, url: &str) -> String {
    format!("{WAYBACK_RAW}/{}oe_/{url}", snapshot.timestamp)
}

/// CDX JSON output is an array of arrays: row 0 is the header, row 1
/// (if present) is the first capture, `[timestamp, statuscode]`.
pub fn parse_cdx(body: &[u8]) -> Result<Option<Snapshot>, FetchError> {
    let rows: Vec<Vec<String>> =
        serde_json::from_slice(body).map_err(|err| FetchError::WaybackHttp(err.to_string()))?;
    let timestamp = match rows.get(1).and_then(|row| row.first()) {
        Some(timestamp) if !timestamp.is_empty() => timestamp.clone(),
        _ => return Ok(None),
    };
    Ok(Some(Snapshot { timestamp }))
}

impl ArchiveClient for WaybackHttpClient {
    fn latest_snapshot(&self, url: &str) -> Result<Option<Snapshot>, FetchError> {
        debug!(url, "wayback cdx lookup");
        let response = self
            .client
            .get(WAYBACK_CDX)
            .query(&[
                ("url", url),
                ("output", "json"),
                ("limit", "1"),
                ("fl", "timestamp,statuscode"),
                ("filter", "statuscode:200"),
            ])
            .send()
            .map_err(|err| FetchError::WaybackHttp(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "CDX request failed".to_string());
            return Err(FetchError::WaybackStatus { status, message });
        }
        let body = response
            .bytes()
            .map_err(|err| FetchError::WaybackHttp(err.to_string()))?;
        parse_cdx(&body)
    }

    fn fetch_snapshot(&self, snapshot: &Snapshot, url: &str) -> Result<Vec<u8>, FetchError> {
        let raw = raw_url(snapshot, url);
        debug!(url = raw.as_str(), "wayback raw fetch");
        // Archived content can be slow; give it longer than the client default.
        let response = self
            .client
            .get(&raw)
            .timeout(Duration::from_secs(30))
            .send()
            .map_err(|err| FetchError::WaybackHttp(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "Wayback fetch failed".to_string());
            return Err(FetchError::WaybackStatus { status, message });
        }
        let bytes = response
            .bytes()
            .map_err(|err| FetchError::WaybackHttp(err.to_string()))?;
        Ok(bytes.to_vec())
    }
}
