//! Choose the representative name and serial for a group.
//!
//! The weights here are domain policy tuned against the working set of
//! source lists, kept as explicit named functions rather than anything
//! configurable.

use std::cmp::Reverse;

use gamedex_core::GameRecord;

use crate::grouper::{Group, GroupKey};

/// Keywords marking pre-release or test builds. Such entries must never
/// become the representative of a group.
const PRERELEASE_MARKERS: &[&str] = &["network test", "demo", "trial", "beta", "preview"];

/// A non-primary member of a consolidated group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: String,
    pub serial: String,
}

/// The consolidated representation of one game: the chosen display name,
/// the serial of the best-ranked member, and the remaining members in
/// descending rank order.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalRecord {
    pub display_name: String,
    pub primary_serial: String,
    pub variants: Vec<Variant>,
}

/// Pick the representative for a group.
///
/// Singleton groups pass through verbatim with no scoring. For larger
/// groups the display name is the curated canonical name when the group
/// was an alias hit, otherwise the member name with the highest
/// [`display_score`]; the primary serial comes from the best member under
/// [`rank_score`] (stable sort, so ties keep input order).
pub fn select(group: &Group) -> CanonicalRecord {
    let members = &group.members;
    if members.len() == 1 {
        let only = &members[0];
        return CanonicalRecord {
            display_name: only.name.clone(),
            primary_serial: only.serial.clone(),
            variants: Vec::new(),
        };
    }

    let display_name = match &group.key {
        GroupKey::Canonical(name) => name.clone(),
        GroupKey::Raw(_) => best_display_name(members),
    };

    let mut ranked: Vec<&GameRecord> = members.iter().collect();
    ranked.sort_by_key(|m| Reverse(rank_score(&m.name)));

    CanonicalRecord {
        display_name,
        primary_serial: ranked[0].serial.clone(),
        variants: ranked[1..]
            .iter()
            .map(|m| Variant {
                name: m.name.clone(),
                serial: m.serial.clone(),
            })
            .collect(),
    }
}

/// Consolidate every group of a run, in group order.
pub fn consolidate(groups: &[Group]) -> Vec<CanonicalRecord> {
    groups.iter().map(select).collect()
}

/// Score a raw display name for representative selection. Higher wins;
/// the first-seen member takes score ties.
///
/// Weights: +4 trademark symbol, +3 registered mark, +2 true mixed case,
/// +0.01 per character, -2 parenthesis or bracket, +1 leading uppercase,
/// -10 pre-release marker.
fn display_score(name: &str) -> f64 {
    let lower = name.to_lowercase();
    let mut score = 0.0;

    if name.contains('™') {
        score += 4.0;
    }
    if name.contains('®') {
        score += 3.0;
    }
    if name != name.to_uppercase() && name != lower {
        score += 2.0;
    }
    score += name.chars().count() as f64 * 0.01;
    if name.contains('(') || name.contains('[') {
        score -= 2.0;
    }
    if name.chars().next().is_some_and(char::is_uppercase) {
        score += 1.0;
    }
    if PRERELEASE_MARKERS.iter().any(|m| lower.contains(m)) {
        score -= 10.0;
    }

    score
}

/// Integer ranking used to order group members (primary first). Same
/// weights as [`display_score`] minus the length, bracket, and leading
/// case terms, so ties are common and the stable sort keeps input order.
fn rank_score(name: &str) -> i32 {
    let lower = name.to_lowercase();
    let mut score = 0;

    if name.contains('™') {
        score += 4;
    }
    if name.contains('®') {
        score += 3;
    }
    if name != name.to_uppercase() && name != lower {
        score += 2;
    }
    if PRERELEASE_MARKERS.iter().any(|m| lower.contains(m)) {
        score -= 10;
    }

    score
}

fn best_display_name(members: &[GameRecord]) -> String {
    let mut best = &members[0];
    let mut best_score = display_score(&best.name);
    for member in &members[1..] {
        let score = display_score(&member.name);
        if score > best_score {
            best = member;
            best_score = score;
        }
    }
    best.name.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_group(pairs: &[(&str, &str)]) -> Group {
        let members: Vec<GameRecord> =
            pairs.iter().map(|(n, s)| GameRecord::new(*n, *s)).collect();
        Group {
            key: GroupKey::Raw(gamedex_core::normalize_title(&members[0].name)),
            members,
        }
    }

    #[test]
    fn test_singleton_passthrough() {
        let group = Group {
            key: GroupKey::Canonical("Bloodborne".to_string()),
            members: vec![GameRecord::new("BLOODBORNE (EU)", "CUSA00208")],
        };
        let rec = select(&group);
        // Verbatim, even though the group key is canonical
        assert_eq!(rec.display_name, "BLOODBORNE (EU)");
        assert_eq!(rec.primary_serial, "CUSA00208");
        assert!(rec.variants.is_empty());
    }

    #[test]
    fn test_canonical_key_overrides_scoring() {
        let group = Group {
            key: GroupKey::Canonical("Dark Souls III".to_string()),
            members: vec![
                GameRecord::new("DARK SOULS III™ Deluxe", "CUSA03365"),
                GameRecord::new("Dark Souls 3", "CUSA08692"),
            ],
        };
        let rec = select(&group);
        assert_eq!(rec.display_name, "Dark Souls III");
    }

    #[test]
    fn test_trademark_name_preferred() {
        let rec = select(&raw_group(&[
            ("bloodborne", "CUSA00208"),
            ("Bloodborne™", "CUSA00207"),
        ]));
        assert_eq!(rec.display_name, "Bloodborne™");
        assert_eq!(rec.primary_serial, "CUSA00207");
        assert_eq!(rec.variants, vec![Variant {
            name: "bloodborne".to_string(),
            serial: "CUSA00208".to_string(),
        }]);
    }

    #[test]
    fn test_mixed_case_beats_all_caps() {
        let rec = select(&raw_group(&[
            ("ELDEN RING", "CUSA18555"),
            ("Elden Ring", "CUSA28863"),
        ]));
        assert_eq!(rec.display_name, "Elden Ring");
        assert_eq!(rec.primary_serial, "CUSA28863");
    }

    #[test]
    fn test_network_test_never_primary() {
        // The network-test variant is longer and would win on length alone
        let rec = select(&raw_group(&[
            ("Elden Ring Network Test Ver", "CUSA27648"),
            ("Elden Ring", "CUSA18555"),
        ]));
        assert_eq!(rec.display_name, "Elden Ring");
        assert_eq!(rec.primary_serial, "CUSA18555");
        assert_eq!(rec.variants[0].serial, "CUSA27648");
    }

    #[test]
    fn test_bracketed_name_penalized() {
        let rec = select(&raw_group(&[
            ("God of War (Bundle Copy)", "CUSA07410"),
            ("God of War", "CUSA07408"),
        ]));
        assert_eq!(rec.display_name, "God of War");
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let rec = select(&raw_group(&[
            ("Some Game", "AA11111"),
            ("Some Game", "BB22222"),
            ("Some Game", "CC33333"),
        ]));
        assert_eq!(rec.primary_serial, "AA11111");
        let order: Vec<&str> = rec.variants.iter().map(|v| v.serial.as_str()).collect();
        assert_eq!(order, vec!["BB22222", "CC33333"]);
    }

    #[test]
    fn test_consolidate_keeps_group_order() {
        let groups = vec![
            raw_group(&[("Beta Quest", "AA11111")]),
            raw_group(&[("Alpha Quest", "BB22222")]),
        ];
        let records = consolidate(&groups);
        assert_eq!(records[0].display_name, "Beta Quest");
        assert_eq!(records[1].display_name, "Alpha Quest");
    }
}
