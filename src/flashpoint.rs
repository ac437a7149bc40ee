use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FetchError;

const FLASHPOINT_API: &str = "https://db-api.unstable.life";
const SEARCH_FIELDS: &str = "id,title,platform,launchCommand";
const SEARCH_LIMIT: &str = "15";

/// One catalog entry. The API omits fields freely, so everything defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub launch_command: Option<String>,
}

pub trait CatalogClient: Send + Sync {
    fn search(&self, title: &str) -> Result<Vec<CatalogRecord>, FetchError>;
}

#[derive(Clone)]
pub struct FlashpointHttpClient {
    client: Client,
}

impl FlashpointHttpClient {
    pub fn new() -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("flashfetch/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| FetchError::CatalogHttp(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(20))
            .build()
            .map_err(|err| FetchError::CatalogHttp(err.to_string()))?;
        Ok(Self { client })
    }
}

impl CatalogClient for FlashpointHttpClient {
    fn search(&self, title: &str) -> Result<Vec<CatalogRecord>, FetchError> {
        let url = format!("{FLASHPOINT_API}/search");
        debug!(title, "flashpoint search");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("title", title),
                ("fields", SEARCH_FIELDS),
                ("limit", SEARCH_LIMIT),
            ])
            .send()
            .map_err(|err| FetchError::CatalogHttp(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "Flashpoint request failed".to_string());
            return Err(FetchError::CatalogStatus { status, message });
        }
        response
            .json()
            .map_err(|err| FetchError::CatalogHttp(err.to_string()))
    }
}

/// Queries the catalog and picks the best match. Any HTTP or parse failure
/// collapses into `None`; callers cannot tell "service down" apart from
/// "game not found", and must not try to.
pub fn resolve<C: CatalogClient + ?Sized>(catalog: &C, title: &str) -> Option<CatalogRecord> {
    let records = match catalog.search(title) {
        Ok(records) => records,
        Err(err) => {
            debug!(%err, "catalog search failed");
            return None;
        }
    };
    select_record(&records, title).cloned()
}

/// Tie-break over the ordered result list, first rule to match wins:
/// exact title on a Flash platform, exact title anywhere, any Flash
/// result, then whatever the service ranked first. Rule 3 can pick a
/// record whose title has nothing to do with the query; that degradation
/// is deliberate.
pub fn select_record<'a>(records: &'a [CatalogRecord], title: &str) -> Option<&'a CatalogRecord> {
    let wanted = title.to_lowercase();
    let title_matches = |record: &CatalogRecord| record.title.to_lowercase() == wanted;
    let is_flash = |record: &CatalogRecord| record.platform.to_lowercase().contains("flash");

    records
        .iter()
        .find(|record| title_matches(record) && is_flash(record))
        .or_else(|| records.iter().find(|record| title_matches(record)))
        .or_else(|| records.iter().find(|record| is_flash(record)))
        .or_else(|| records.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, platform: &str) -> CatalogRecord {
        CatalogRecord {
            id: String::new(),
            title: title.to_string(),
            platform: platform.to_string(),
            launch_command: None,
        }
    }

    #[test]
    fn exact_flash_match_beats_exact_title_alone() {
        let records = vec![record("Foo", "Web"), record("Foo", "Flash Player")];
        let selected = select_record(&records, "foo").unwrap();
        assert_eq!(selected.platform, "Flash Player");
    }

    #[test]
    fn exact_title_beats_flash_with_other_title() {
        let records = vec![record("Foo Deluxe", "Flash"), record("foo", "Shockwave")];
        let selected = select_record(&records, "Foo").unwrap();
        assert_eq!(selected.title, "foo");
    }

    #[test]
    fn flash_platform_beats_plain_first_result() {
        let records = vec![record("Bar", "HTML5"), record("Baz", "Flash")];
        let selected = select_record(&records, "Foo").unwrap();
        assert_eq!(selected.title, "Baz");
    }

    #[test]
    fn falls_back_to_first_result() {
        let records = vec![record("Bar", "HTML5"), record("Baz", "Shockwave")];
        let selected = select_record(&records, "Foo").unwrap();
        assert_eq!(selected.title, "Bar");
    }

    #[test]
    fn empty_results_select_nothing() {
        assert!(select_record(&[], "Foo").is_none());
    }

    #[test]
    fn resolve_absorbs_client_errors() {
        struct Failing;
        impl CatalogClient for Failing {
            fn search(&self, _title: &str) -> Result<Vec<CatalogRecord>, FetchError> {
                Err(FetchError::CatalogHttp("connection refused".to_string()))
            }
        }
        assert!(resolve(&Failing, "Foo").is_none());
    }
}
