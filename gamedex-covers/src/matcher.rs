//! Two-tier cover matching: exact normalized key, then token overlap.

use std::collections::{HashMap, HashSet};

use gamedex_core::{match_tokens, normalize_for_matching};
use gamedex_resolve::CanonicalRecord;

use crate::catalog::CoverEntry;

/// Minimum fraction of the query's tokens that must appear in a candidate
/// for a fuzzy match to be accepted.
pub const MIN_TOKEN_OVERLAP: f64 = 0.75;

/// How a cover was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// The query's normalized title equals a catalog entry's.
    Exact,
    /// Accepted on token overlap at or above [`MIN_TOKEN_OVERLAP`].
    Fuzzy,
}

/// A matched catalog entry with its provenance.
#[derive(Debug, Clone)]
pub struct CoverMatch<'a> {
    pub entry: &'a CoverEntry,
    pub tier: MatchTier,
    /// Fraction of query tokens found in the entry (1.0 for exact).
    pub overlap: f64,
}

/// An indexed view of the external cover catalog for fast lookups.
///
/// Built once from the catalog entries: an exact map from normalized
/// title to entry, plus per-entry token sets for the fuzzy tier.
pub struct CoverIndex {
    entries: Vec<CoverEntry>,
    by_key: HashMap<String, usize>,
    tokens: Vec<HashSet<String>>,
}

impl CoverIndex {
    /// Build an index from catalog entries.
    ///
    /// Duplicate normalized titles keep the last entry (matching the
    /// exact map's overwrite order); titles that normalize to nothing
    /// are unreachable by either tier.
    pub fn from_entries(entries: Vec<CoverEntry>) -> Self {
        let mut by_key = HashMap::new();
        let mut tokens = Vec::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            let key = normalize_for_matching(&entry.title);
            if !key.is_empty() {
                by_key.insert(key, i);
            }
            tokens.push(match_tokens(&entry.title));
        }

        Self {
            entries,
            by_key,
            tokens,
        }
    }

    /// Number of catalog entries in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the best cover for a display name.
    ///
    /// Tier 1 returns an exact normalized-title hit immediately — it wins
    /// even when a fuzzy candidate would score higher. Tier 2 scans every
    /// entry for the maximum token overlap, asymmetric on purpose: it
    /// measures how much of the *query* the candidate covers, so catalog
    /// titles carrying extra qualifier words are not penalized. Ties keep
    /// the first-seen candidate. A query with no tokens yields `None`.
    pub fn find_cover(&self, name: &str) -> Option<CoverMatch<'_>> {
        let key = normalize_for_matching(name);
        if let Some(&i) = self.by_key.get(&key) {
            return Some(CoverMatch {
                entry: &self.entries[i],
                tier: MatchTier::Exact,
                overlap: 1.0,
            });
        }

        let query: HashSet<&str> = key.split_whitespace().collect();
        if query.is_empty() {
            return None;
        }

        let mut best: Option<(usize, f64)> = None;
        for (i, entry_tokens) in self.tokens.iter().enumerate() {
            let shared = query.iter().filter(|&&t| entry_tokens.contains(t)).count();
            let overlap = shared as f64 / query.len() as f64;
            if overlap >= MIN_TOKEN_OVERLAP && best.is_none_or(|(_, b)| overlap > b) {
                best = Some((i, overlap));
            }
        }

        best.map(|(i, overlap)| CoverMatch {
            entry: &self.entries[i],
            tier: MatchTier::Fuzzy,
            overlap,
        })
    }

    /// Convenience: just the matched cover URL.
    pub fn find_cover_url(&self, name: &str) -> Option<&str> {
        self.find_cover(name).map(|m| m.entry.cover_url.as_str())
    }
}

/// Result of linking a consolidated catalog against cover sources: the
/// serial → URL map plus match-quality counts for the batch summary.
#[derive(Debug, Clone, Default)]
pub struct CoverLinks {
    pub by_serial: HashMap<String, String>,
    /// Records that resolved to a cover.
    pub matched: usize,
    /// Records with no cover at either tier.
    pub unmatched: usize,
}

/// Link each consolidated record to a cover via the index.
///
/// Every serial of a matched record — primary and variants — maps to the
/// same URL, since regional re-releases share cover art. Unmatched
/// records contribute nothing to the map.
pub fn link_covers(records: &[CanonicalRecord], index: &CoverIndex) -> CoverLinks {
    let mut links = CoverLinks::default();

    for record in records {
        let Some(found) = index.find_cover(&record.display_name) else {
            log::debug!("no cover match for '{}'", record.display_name);
            links.unmatched += 1;
            continue;
        };

        links.matched += 1;
        let url = &found.entry.cover_url;
        links
            .by_serial
            .entry(record.primary_serial.clone())
            .or_insert_with(|| url.clone());
        for variant in &record.variants {
            links
                .by_serial
                .entry(variant.serial.clone())
                .or_insert_with(|| url.clone());
        }
    }

    links
}
