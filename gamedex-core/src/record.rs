//! Source catalog records and serial-number validation.

/// One entry from a source games list: the original line, the display
/// name, and the platform serial that identifies the release.
///
/// Multiple records may share a serial (the same release listed by more
/// than one source) or a display name (variant spellings of one game).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// The source line this record was parsed from, verbatim.
    pub line: String,
    /// Display name as it appeared in the source.
    pub name: String,
    /// Platform serial, e.g. "CUSA00207".
    pub serial: String,
}

impl GameRecord {
    /// Build a record from a name and serial, synthesizing the canonical
    /// `<name> [<serial>]` line form.
    pub fn new(name: impl Into<String>, serial: impl Into<String>) -> Self {
        let name = name.into();
        let serial = serial.into();
        Self {
            line: format!("{} [{}]", name, serial),
            name,
            serial,
        }
    }
}

/// Check whether a string has the platform serial shape: 2-6 uppercase
/// ASCII letters, 4-9 ASCII digits, optionally one `-` or `_` delimited
/// alphanumeric suffix group (disc or part numbers, e.g. "CUSA01234-1").
pub fn is_valid_serial(s: &str) -> bool {
    let bytes = s.as_bytes();

    let letters = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
    if !(2..=6).contains(&letters) {
        return false;
    }

    let digits = bytes[letters..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if !(4..=9).contains(&digits) {
        return false;
    }

    let rest = &bytes[letters + digits..];
    if rest.is_empty() {
        return true;
    }
    if rest[0] != b'-' && rest[0] != b'_' {
        return false;
    }
    let suffix = &rest[1..];
    !suffix.is_empty() && suffix.iter().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_serials() {
        assert!(is_valid_serial("CUSA00207"));
        assert!(is_valid_serial("SLUS1234"));
        assert!(is_valid_serial("AB123456789"));
        assert!(is_valid_serial("PCJS50003"));
        assert!(is_valid_serial("CUSA01234-1"));
        assert!(is_valid_serial("CUSA01234_2"));
    }

    #[test]
    fn test_invalid_serials() {
        // Too few letters / digits
        assert!(!is_valid_serial("C1234567"));
        assert!(!is_valid_serial("CUSA123"));
        // Too many letters / digits
        assert!(!is_valid_serial("ABCDEFG1234"));
        assert!(!is_valid_serial("CUSA0123456789"));
        // Case and stray characters
        assert!(!is_valid_serial("cusa00207"));
        assert!(!is_valid_serial("CUSA 00207"));
        assert!(!is_valid_serial(""));
        // Dangling or malformed suffix
        assert!(!is_valid_serial("CUSA01234-"));
        assert!(!is_valid_serial("CUSA01234+1"));
    }

    #[test]
    fn test_record_new_synthesizes_line() {
        let rec = GameRecord::new("Bloodborne", "CUSA00207");
        assert_eq!(rec.line, "Bloodborne [CUSA00207]");
    }
}
