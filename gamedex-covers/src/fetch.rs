//! Bounded-parallel cover fetching from the remote store.
//!
//! Lookups are independent, so up to `workers` requests run at once and
//! results are folded into the map only after each task completes — the
//! serial keys make aggregation order-independent. One failed or
//! timed-out title yields absence for that title only; the batch never
//! aborts.

use futures::stream::{self, StreamExt};
use tokio::time::Duration;

use gamedex_resolve::CanonicalRecord;

use crate::client::StoreClient;
use crate::matcher::CoverLinks;

/// Default number of concurrent store lookups.
pub const DEFAULT_WORKERS: usize = 8;

/// Hard per-title ceiling on top of the client's own request timeout,
/// covering rate-limiter waits as well.
const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// One remote lookup: which serial to map, queried by which title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverQuery {
    pub serial: String,
    pub title: String,
}

impl CoverQuery {
    pub fn new(serial: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            serial: serial.into(),
            title: title.into(),
        }
    }
}

/// Queries for consolidated records that are not yet linked, keyed by
/// their primary serial. Used to top up a local-catalog pass with remote
/// lookups.
pub fn missing_queries(records: &[CanonicalRecord], links: &CoverLinks) -> Vec<CoverQuery> {
    records
        .iter()
        .filter(|r| !links.by_serial.contains_key(&r.primary_serial))
        .map(|r| CoverQuery::new(&r.primary_serial, &r.display_name))
        .collect()
}

/// Fetch covers for every query with bounded parallelism.
pub async fn fetch_covers(
    client: &StoreClient,
    queries: Vec<CoverQuery>,
    workers: usize,
) -> CoverLinks {
    let total = queries.len();
    let results: Vec<(String, Option<String>)> = stream::iter(queries)
        .map(|query| async move {
            let url = match tokio::time::timeout(FETCH_TIMEOUT, client.find_cover(&query.title))
                .await
            {
                Ok(Ok(url)) => url,
                Ok(Err(e)) => {
                    log::debug!("cover fetch failed for '{}': {e}", query.title);
                    None
                }
                Err(_) => {
                    log::debug!("cover fetch timed out for '{}'", query.title);
                    None
                }
            };
            (query.serial, url)
        })
        .buffer_unordered(workers.max(1))
        .collect()
        .await;

    let mut links = CoverLinks::default();
    for (serial, url) in results {
        match url {
            Some(url) => {
                links.matched += 1;
                links.by_serial.insert(serial, url);
            }
            None => links.unmatched += 1,
        }
    }

    log::info!("cover fetch: {}/{} titles resolved", links.matched, total);
    links
}
