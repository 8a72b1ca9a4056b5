//! Catalog line format: parsing source lists and rendering the
//! consolidated output.
//!
//! Source lists are one record per line, `<display name> [<SERIAL>]`.
//! A line may carry several bracketed blocks (region tags, re-release
//! serials); the serial is the last block with a valid serial shape.
//! Consolidated output re-emits singleton lines unchanged and renders
//! multi-member groups as a representative line followed by indented
//! `↳` variant lines and a blank separator.

use std::path::Path;

use thiserror::Error;

use gamedex_core::{GameRecord, is_valid_serial};

use crate::grouper::Group;
use crate::select::select;

/// Marker glyph prefixing variant lines in consolidated output.
const VARIANT_MARKER: char = '↳';

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Counts from one consolidation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSummary {
    /// Groups with a single member, emitted unchanged.
    pub singles: usize,
    /// Multi-member groups consolidated under a representative.
    pub grouped: usize,
}

/// Parse one catalog line into a record.
///
/// The display name is the text before the first bracketed block; the
/// serial is taken from the last block whose content has the serial
/// shape. Leading indentation and a `↳` variant marker are tolerated
/// and stripped. Returns `None` for blank lines and lines with no
/// parsable name or serial — "not a record" is not an error.
pub fn parse_line(line: &str) -> Option<GameRecord> {
    let body = line
        .trim_start()
        .strip_prefix(VARIANT_MARKER)
        .map(str::trim_start)
        .unwrap_or_else(|| line.trim_start())
        .trim_end();
    if body.is_empty() {
        return None;
    }

    let mut serials: Vec<&str> = Vec::new();
    let mut name_end: Option<usize> = None;
    let mut block_start: Option<usize> = None;

    for (i, ch) in body.char_indices() {
        match ch {
            '[' if block_start.is_none() => {
                // A leading '[' belongs to the name (e.g. bracketed
                // marketing titles), not to a serial block.
                if i > 0 && name_end.is_none() {
                    name_end = Some(i);
                }
                block_start = Some(i + 1);
            }
            ']' => {
                if let Some(start) = block_start.take() {
                    let content = &body[start..i];
                    if is_valid_serial(content) {
                        serials.push(content);
                    }
                }
            }
            _ => {}
        }
    }

    let name = body[..name_end?].trim();
    let serial = serials.last()?;
    if name.is_empty() {
        return None;
    }

    Some(GameRecord {
        line: body.to_string(),
        name: name.to_string(),
        serial: serial.to_string(),
    })
}

/// Parse a whole catalog document, skipping non-record lines.
pub fn parse_catalog(text: &str) -> Vec<GameRecord> {
    text.lines().filter_map(parse_line).collect()
}

/// Read and parse a catalog file.
pub fn read_catalog(path: &Path) -> Result<Vec<GameRecord>, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(parse_catalog(&text))
}

/// Render groups as the consolidated list.
pub fn render_grouped(groups: &[Group]) -> (String, GroupSummary) {
    let mut lines: Vec<String> = Vec::new();
    let mut summary = GroupSummary {
        singles: 0,
        grouped: 0,
    };

    for group in groups {
        if group.members.len() == 1 {
            lines.push(group.members[0].line.clone());
            summary.singles += 1;
            continue;
        }

        let rec = select(group);
        lines.push(format!("{} [{}]", rec.display_name, rec.primary_serial));
        for variant in &rec.variants {
            lines.push(format!("  {} {} [{}]", VARIANT_MARKER, variant.name, variant.serial));
        }
        lines.push(String::new());
        summary.grouped += 1;
    }

    let mut out = lines.join("\n");
    if !out.ends_with('\n') {
        out.push('\n');
    }
    (out, summary)
}

/// Render and write the consolidated list to a file.
pub fn write_grouped(path: &Path, groups: &[Group]) -> Result<GroupSummary, CatalogError> {
    let (text, summary) = render_grouped(groups);
    std::fs::write(path, text).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    log::info!(
        "wrote consolidated list to {}: {} single entries, {} grouped games",
        path.display(),
        summary.singles,
        summary.grouped,
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::AliasTable;
    use crate::grouper::group_records;

    #[test]
    fn test_parse_simple_line() {
        let rec = parse_line("Bloodborne™ [CUSA00207]").unwrap();
        assert_eq!(rec.name, "Bloodborne™");
        assert_eq!(rec.serial, "CUSA00207");
        assert_eq!(rec.line, "Bloodborne™ [CUSA00207]");
    }

    #[test]
    fn test_parse_takes_last_valid_serial() {
        let rec = parse_line("The Last of Us [CUSA00552] [CUSA00554]").unwrap();
        assert_eq!(rec.name, "The Last of Us");
        assert_eq!(rec.serial, "CUSA00554");
    }

    #[test]
    fn test_parse_skips_non_serial_blocks() {
        let rec = parse_line("Gran Turismo Sport [EU] [CUSA03220]").unwrap();
        assert_eq!(rec.name, "Gran Turismo Sport");
        assert_eq!(rec.serial, "CUSA03220");
    }

    #[test]
    fn test_parse_variant_marker_lines() {
        let rec = parse_line("  ↳ Bloodborne [CUSA00208]").unwrap();
        assert_eq!(rec.name, "Bloodborne");
        assert_eq!(rec.serial, "CUSA00208");
        assert_eq!(rec.line, "Bloodborne [CUSA00208]");
    }

    #[test]
    fn test_parse_leading_bracket_title() {
        let rec = parse_line("[PROTOTYPE® BIOHAZARD BUNDLE] [CUSA03373]").unwrap();
        assert_eq!(rec.name, "[PROTOTYPE® BIOHAZARD BUNDLE]");
        assert_eq!(rec.serial, "CUSA03373");
    }

    #[test]
    fn test_non_records_are_none() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("just a title with no serial").is_none());
        assert!(parse_line("Broken Entry [notaserial]").is_none());
        assert!(parse_line("[CUSA00207]").is_none());
    }

    #[test]
    fn test_parse_catalog_skips_blanks() {
        let text = "Bloodborne [CUSA00207]\n\n# comment-ish junk\nElden Ring [CUSA18555]\n";
        let records = parse_catalog(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].serial, "CUSA18555");
    }

    #[test]
    fn test_render_singleton_unchanged() {
        let aliases = AliasTable::builtin();
        let records = parse_catalog("Ghost of Tsushima [CUSA13380]\n");
        let groups = group_records(records, &aliases);
        let (out, summary) = render_grouped(&groups);

        assert_eq!(out, "Ghost of Tsushima [CUSA13380]\n");
        assert_eq!(summary.singles, 1);
        assert_eq!(summary.grouped, 0);
    }

    #[test]
    fn test_render_grouped_format() {
        let aliases = AliasTable::builtin();
        let records = parse_catalog(
            "DARK SOULS III [CUSA03365]\nDark Souls 3 [CUSA08692]\nBloodborne [CUSA00207]\n",
        );
        let groups = group_records(records, &aliases);
        let (out, summary) = render_grouped(&groups);

        // Canonical representative line (primary = best-ranked member,
        // here the mixed-case one), then ranked variants, then a blank
        // separator; the singleton follows untouched.
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Dark Souls III [CUSA08692]");
        assert_eq!(lines[1], "  ↳ DARK SOULS III [CUSA03365]");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Bloodborne [CUSA00207]");
        assert_eq!(summary.singles, 1);
        assert_eq!(summary.grouped, 1);
    }
}
