//! Partition source records into same-game groups.

use std::collections::HashMap;

use gamedex_core::{GameRecord, normalize_title};

use crate::aliases::AliasTable;

/// How a group's identity was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKey {
    /// The normalized title hit the alias table; the key is the curated
    /// canonical display name.
    Canonical(String),
    /// No alias hit; the key is the raw normalized title itself.
    Raw(String),
}

impl GroupKey {
    pub fn as_str(&self) -> &str {
        match self {
            GroupKey::Canonical(s) | GroupKey::Raw(s) => s,
        }
    }

    pub fn is_canonical(&self) -> bool {
        matches!(self, GroupKey::Canonical(_))
    }
}

/// A run of records resolved to the same game identity.
///
/// Members are in append order (the order their records appeared in the
/// input), never sorted. Groups are never empty.
#[derive(Debug, Clone)]
pub struct Group {
    pub key: GroupKey,
    pub members: Vec<GameRecord>,
}

/// Group records by canonical identity, preserving first-seen order.
///
/// For each record in input order: normalize the display name, resolve
/// it against the alias table, and append the record to the group for
/// the canonical name (alias hit) or the raw normalized key (miss). The
/// emission order of groups is the order their first member appeared,
/// so a fixed input order always reproduces the same output.
pub fn group_records(
    records: impl IntoIterator<Item = GameRecord>,
    aliases: &AliasTable,
) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let normalized = normalize_title(&record.name);
        let key = match aliases.resolve(&normalized) {
            Some(canonical) => GroupKey::Canonical(canonical.to_string()),
            None => GroupKey::Raw(normalized),
        };

        match index.get(key.as_str()) {
            Some(&at) => groups[at].members.push(record),
            None => {
                index.insert(key.as_str().to_string(), groups.len());
                groups.push(Group {
                    key,
                    members: vec![record],
                });
            }
        }
    }

    groups
}
