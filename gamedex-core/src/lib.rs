//! Core data model and title normalization for the game catalog pipeline.
//!
//! This crate defines the source record type and the pure normalization
//! functions the rest of the workspace builds on. It does no I/O and has
//! no async surface, so consumers can use it from sync and async contexts
//! alike.

pub mod normalize;
pub mod record;

pub use normalize::{match_tokens, normalize_for_matching, normalize_title};
pub use record::{GameRecord, is_valid_serial};
