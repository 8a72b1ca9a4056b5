//! Entity resolution for noisy game catalogs.
//!
//! Takes parsed source records and answers "which records describe the
//! same game?": an alias table maps known variant spellings to canonical
//! display names, the grouper partitions records by resolved identity in
//! first-seen order, and the selector picks the best display name and
//! serial to represent each group. Line parsing and consolidated-list
//! rendering live here too since they are defined by the same format.

pub mod aliases;
mod builtin;
pub mod grouper;
pub mod lines;
pub mod select;

pub use aliases::AliasTable;
pub use grouper::{Group, GroupKey, group_records};
pub use lines::{
    CatalogError, GroupSummary, parse_catalog, parse_line, read_catalog, render_grouped,
    write_grouped,
};
pub use select::{CanonicalRecord, Variant, consolidate, select};
