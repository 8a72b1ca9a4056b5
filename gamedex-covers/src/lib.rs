//! Cover-art linkage for consolidated game catalogs.
//!
//! Matches canonical records against an external cover catalog with a
//! two-tier strategy (exact normalized title, then token overlap), and
//! can top up misses with bounded-parallel lookups against the store
//! search API. Output is a serial → cover URL map; a record with no
//! match is simply absent from it.

pub mod catalog;
pub mod client;
pub mod error;
pub mod fetch;
pub mod matcher;
pub mod types;

pub use catalog::{CoverEntry, load_cover_catalog, parse_cover_catalog, write_cover_links};
pub use client::StoreClient;
pub use error::CoverError;
pub use fetch::{CoverQuery, DEFAULT_WORKERS, fetch_covers, missing_queries};
pub use matcher::{CoverIndex, CoverLinks, CoverMatch, MIN_TOKEN_OVERLAP, MatchTier, link_covers};
pub use types::{StoreImage, StoreItem, TumblerResponse};
