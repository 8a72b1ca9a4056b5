//! Curated alias table mapping normalized title variants to canonical
//! display names.

use std::collections::HashMap;

use gamedex_core::normalize_title;

use crate::builtin::BUILTIN_GROUPS;

/// Lookup table from normalized title keys to canonical display names.
///
/// Built once from an ordered list of groups and immutable afterward, so
/// it can be shared freely across batch runs. A miss is not an error —
/// it just means "no curated alias for this title."
pub struct AliasTable {
    by_key: HashMap<String, String>,
}

impl AliasTable {
    /// Build the table from the builtin curated groups.
    pub fn builtin() -> Self {
        Self::from_groups(BUILTIN_GROUPS)
    }

    /// Build a table from alias groups: each group's first entry is the
    /// canonical display name, the rest are variant spellings.
    ///
    /// Every variant and the canonical name itself are normalized and
    /// inserted as keys. When two groups claim the same key the
    /// later-registered group wins; each override is logged at debug
    /// level so table authors can audit the data.
    pub fn from_groups(groups: &[&[&str]]) -> Self {
        let mut by_key = HashMap::new();

        for group in groups {
            let Some((&canonical, variants)) = group.split_first() else {
                continue;
            };
            for &variant in variants {
                insert_key(&mut by_key, normalize_title(variant), canonical);
            }
            insert_key(&mut by_key, normalize_title(canonical), canonical);
        }

        Self { by_key }
    }

    /// Resolve a normalized title key to its canonical display name.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.by_key.get(key).map(String::as_str)
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

fn insert_key(by_key: &mut HashMap<String, String>, key: String, canonical: &str) {
    if let Some(previous) = by_key.get(&key) {
        if previous != canonical {
            log::debug!("alias key '{key}' re-registered: '{previous}' -> '{canonical}'");
        }
    }
    by_key.insert(key, canonical.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_variants_to_canonical() {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve("dark souls 3"), Some("Dark Souls III"));
        assert_eq!(table.resolve("dark souls iii"), Some("Dark Souls III"));
        assert_eq!(table.resolve("gta v"), Some("Grand Theft Auto V"));
    }

    #[test]
    fn test_canonical_name_resolves_to_itself() {
        let table = AliasTable::builtin();
        // The canonical's own normalized form is registered too
        assert_eq!(table.resolve("bloodborne"), Some("Bloodborne"));
        assert_eq!(
            table.resolve("ace combat 7 skies unknown"),
            Some("ACE COMBAT™ 7: SKIES UNKNOWN"),
        );
    }

    #[test]
    fn test_miss_is_absent_not_error() {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve("definitely not a real game"), None);
    }

    #[test]
    fn test_variants_are_normalized_on_insert() {
        // Variant text with punctuation still registers under its
        // normalized key
        let groups: &[&[&str]] = &[&["Crash Bandicoot N. Sane Trilogy", "crash bandicoot n. sane trilogy"]];
        let table = AliasTable::from_groups(groups);
        assert_eq!(
            table.resolve("crash bandicoot n sane trilogy"),
            Some("Crash Bandicoot N. Sane Trilogy"),
        );
    }

    #[test]
    fn test_last_registered_group_wins() {
        let groups: &[&[&str]] = &[
            &["First Title", "shared alias"],
            &["Second Title", "shared alias"],
        ];
        let table = AliasTable::from_groups(groups);
        assert_eq!(table.resolve("shared alias"), Some("Second Title"));
    }

    #[test]
    fn test_empty_groups_are_skipped() {
        let groups: &[&[&str]] = &[&[]];
        let table = AliasTable::from_groups(groups);
        assert!(table.is_empty());
    }
}
