//! Response types for the store search API.
//!
//! The store returns loosely-shaped JSON; every field is defaulted so a
//! missing or null field never fails the whole response.

use serde::Deserialize;

/// Top-level search ("tumbler") response.
#[derive(Debug, Clone, Deserialize)]
pub struct TumblerResponse {
    #[serde(default)]
    pub links: Vec<StoreItem>,
}

/// One product in a store search result.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "playable_platform")]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub images: Vec<StoreImage>,
}

/// An image attached to a store product.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreImage {
    #[serde(default, rename = "type")]
    pub kind: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
}

impl StoreItem {
    /// First usable cover image URL, if any. Images carrying an empty
    /// URL are skipped, not taken as the final answer.
    pub fn cover_url(&self) -> Option<&str> {
        self.images
            .iter()
            .find_map(|img| img.url.as_deref().filter(|url| !url.is_empty()))
    }
}
