//! External cover catalog: loading the cached cover list and writing the
//! serial → cover URL output map.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::CoverError;

/// One entry of the external cover catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoverEntry {
    /// Title as the external catalog spells it.
    pub title: String,
    /// Cover art URL.
    #[serde(rename = "cover")]
    pub cover_url: String,
}

#[derive(Debug, Deserialize)]
struct CoverCache {
    games: Vec<CoverEntry>,
}

/// Parse a cover cache document: `{"games": [{"title": ..., "cover": ...}, ...]}`.
pub fn parse_cover_catalog(text: &str) -> Result<Vec<CoverEntry>, CoverError> {
    let cache: CoverCache = serde_json::from_str(text)?;
    Ok(cache.games)
}

/// Load a cover cache file.
pub fn load_cover_catalog(path: &Path) -> Result<Vec<CoverEntry>, CoverError> {
    let text = std::fs::read_to_string(path).map_err(|e| CoverError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_cover_catalog(&text)
}

/// Write a serial → cover URL map as compact JSON. Unresolved serials are
/// simply absent, never present with a null value.
pub fn write_cover_links(
    path: &Path,
    links: &HashMap<String, String>,
) -> Result<(), CoverError> {
    let json = serde_json::to_string(links)?;
    std::fs::write(path, json).map_err(|e| CoverError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cover_catalog() {
        let text = r#"{"games":[
            {"title":"Bloodborne","cover":"https://img.example/bb.jpg"},
            {"title":"God of War","cover":"https://img.example/gow.jpg"}
        ]}"#;
        let entries = parse_cover_catalog(text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Bloodborne");
        assert_eq!(entries[1].cover_url, "https://img.example/gow.jpg");
    }

    #[test]
    fn test_parse_rejects_malformed_document() {
        assert!(parse_cover_catalog("not json").is_err());
        assert!(parse_cover_catalog(r#"{"games": 5}"#).is_err());
    }
}
