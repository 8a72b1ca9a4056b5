//! HTTP client for the store search API, with polite rate limiting.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

use crate::error::CoverError;
use crate::types::{StoreItem, TumblerResponse};

const BASE_URL: &str = "https://store.playstation.com/store/api/chihiro/00_09_000";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(500);
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Client for store title searches.
///
/// Cheap to share by reference across concurrent lookups; the rate
/// limiter spaces out requests regardless of how many workers call in.
pub struct StoreClient {
    http: reqwest::Client,
    country: String,
    last_request: Arc<Mutex<Instant>>,
}

impl StoreClient {
    /// Create a client for the US storefront.
    pub fn new() -> Result<Self, CoverError> {
        Self::with_country("US")
    }

    /// Create a client for a specific storefront country code.
    pub fn with_country(country: &str) -> Result<Self, CoverError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            country: country.to_string(),
            last_request: Arc::new(Mutex::new(Instant::now() - MIN_REQUEST_INTERVAL)),
        })
    }

    /// Build the tumbler search URL for a title. The title goes in as a
    /// single path segment, percent-encoded, so `?` or `#` in a game name
    /// cannot leak into a query string or fragment.
    fn search_url(&self, name: &str) -> reqwest::Url {
        let mut url = reqwest::Url::parse(BASE_URL).expect("base URL is valid");
        url.path_segments_mut()
            .expect("base URL has a path")
            .extend(["tumbler", self.country.as_str(), "en", "999", name]);
        url
    }

    /// Search the store for a title. A 404 means "no results", not an
    /// error; other non-success statuses propagate.
    pub async fn search(&self, name: &str) -> Result<Vec<StoreItem>, CoverError> {
        self.rate_limit().await;

        let resp = self.http.get(self.search_url(name)).send().await?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !resp.status().is_success() {
            return Err(CoverError::Api(format!(
                "store search for '{}' returned HTTP {}",
                name,
                resp.status(),
            )));
        }

        let body: TumblerResponse = resp.json().await?;
        Ok(body.links)
    }

    /// Search for a title and return its first usable cover URL.
    pub async fn find_cover(&self, name: &str) -> Result<Option<String>, CoverError> {
        let items = self.search(name).await?;
        Ok(items
            .iter()
            .find_map(|item| item.cover_url())
            .map(str::to_string))
    }

    /// Wait until at least MIN_REQUEST_INTERVAL has passed since the last
    /// API request.
    async fn rate_limit(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();
        if elapsed < MIN_REQUEST_INTERVAL {
            tokio::time::sleep(MIN_REQUEST_INTERVAL - elapsed).await;
        }
        *last = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_reserved_characters() {
        let client = StoreClient::new().unwrap();
        let url = client.search_url("grand theft auto san andreas ? the definitive edition");
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
        assert!(url.path().ends_with(
            "/tumbler/US/en/999/grand%20theft%20auto%20san%20andreas%20%3F%20the%20definitive%20edition"
        ));
    }

    #[test]
    fn test_search_url_keeps_hash_in_path() {
        let client = StoreClient::with_country("GB").unwrap();
        let url = client.search_url("Hitman #47");
        assert!(url.fragment().is_none());
        assert!(url.path().ends_with("/tumbler/GB/en/999/Hitman%20%2347"));
    }
}
