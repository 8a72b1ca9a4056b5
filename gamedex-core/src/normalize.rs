//! Title normalization.
//!
//! Two variants with different jobs:
//!
//! - [`normalize_title`] folds case, punctuation, and trademark symbols
//!   into a comparison key used for grouping. Sequel suffixes ("III",
//!   "2") are preserved — sequels are distinct games unless an alias
//!   group says otherwise.
//! - [`normalize_for_matching`] additionally strips a fixed vocabulary of
//!   platform/edition noise words ("remastered", "goty", ...). It is used
//!   only when matching against external cover catalogs, never for
//!   grouping, because it is lossy enough to merge distinct releases.
//!
//! Both are pure and total: any Unicode input produces a key, never an
//! error.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Platform/edition qualifier words that external catalogs add but the
/// source lists usually omit (or vice versa). Word-boundary matched.
static NOISE_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(ps4|ps3|ps5|pkg|fpkg|iso|remaster(ed)?|definitive edition|",
        r"complete edition|gold edition|goty|game of the year|",
        r"deluxe edition|standard edition|digital edition|bundle|collection|",
        r"hd|4k|vr)\b",
    ))
    .expect("noise word pattern is valid")
});

/// Normalize a display title into the comparison key used for grouping.
///
/// Trademark/registered/copyright symbols are dropped; a fixed
/// punctuation set (colon, hyphen, en/em dash, period, comma, bang,
/// question mark, ASCII quotes, parens, ampersand, plus) maps to spaces;
/// the result is lowercased with whitespace runs collapsed.
///
/// ```
/// use gamedex_core::normalize_title;
///
/// assert_eq!(normalize_title("Bloodborne™"), "bloodborne");
/// assert_eq!(
///     normalize_title("Dark Souls III: The Fire Fades Edition"),
///     "dark souls iii the fire fades edition",
/// );
/// ```
pub fn normalize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for ch in title.chars() {
        match ch {
            '™' | '®' | '©' => {}
            ':' | '-' | '–' | '—' | '.' | ',' | '!' | '?' | '\'' | '"' | '(' | ')' | '&'
            | '+' => out.push(' '),
            c => out.extend(c.to_lowercase()),
        }
    }
    collapse_whitespace(&out)
}

/// Normalize a title for cover-catalog matching.
///
/// Beyond [`normalize_title`]'s folding this removes the noise-word
/// vocabulary and then every non-alphanumeric character, so
/// "The Last of Us™ Remastered" and "The Last of Us" produce the same
/// key. Too aggressive for grouping; fine for best-effort art lookup.
pub fn normalize_for_matching(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| !matches!(c, '™' | '®' | '©'))
        .collect();
    let denoised = NOISE_WORDS.replace_all(&stripped, "");
    let folded: String = denoised
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();
    collapse_whitespace(&folded)
}

/// Unique whitespace-separated tokens of the matching-normalized title.
pub fn match_tokens(title: &str) -> HashSet<String> {
    normalize_for_matching(title)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_symbol_invariance() {
        assert_eq!(normalize_title("Bloodborne™"), normalize_title("bloodborne"));
        assert_eq!(normalize_title("Crysis® Remastered"), "crysis remastered");
        assert_eq!(normalize_title("NieR:Automata"), "nier automata");
    }

    #[test]
    fn test_punctuation_folds_to_spaces() {
        assert_eq!(
            normalize_title("Marvel's Spider-Man: Miles Morales"),
            "marvel s spider man miles morales",
        );
        assert_eq!(normalize_title("Ratchet & Clank"), "ratchet clank");
        assert_eq!(
            normalize_title("Grand Theft Auto: The Trilogy – The Definitive Edition"),
            "grand theft auto the trilogy the definitive edition",
        );
    }

    #[test]
    fn test_sequel_suffixes_preserved() {
        assert_eq!(normalize_title("Dark Souls III"), "dark souls iii");
        assert_eq!(normalize_title("Dark Souls 3"), "dark souls 3");
        assert_ne!(normalize_title("Dark Souls III"), normalize_title("Dark Souls 3"));
    }

    #[test]
    fn test_idempotent() {
        for title in [
            "Bloodborne™",
            "Dark Souls III: The Fire Fades Edition",
            "ACE COMBAT™ 7: SKIES UNKNOWN",
            "FINAL FANTASY X/X-2 HD Remaster",
        ] {
            let once = normalize_title(title);
            assert_eq!(normalize_title(&once), once);
        }
    }

    #[test]
    fn test_total_over_unicode() {
        // Must never fail, whatever the input
        assert_eq!(normalize_title(""), "");
        assert_eq!(normalize_title("   "), "");
        let _ = normalize_title("ドラゴンクエストXI 過ぎ去りし時を求めて");
    }

    #[test]
    fn test_matching_strips_noise_words() {
        assert_eq!(
            normalize_for_matching("The Last of Us™ Remastered"),
            "the last of us",
        );
        assert_eq!(
            normalize_for_matching("Horizon Zero Dawn: Complete Edition PS4"),
            "horizon zero dawn",
        );
        assert_eq!(
            normalize_for_matching("Devil May Cry HD Collection"),
            "devil may cry",
        );
    }

    #[test]
    fn test_matching_keeps_ordinary_words() {
        // "hd" is noise only as a standalone word
        assert_eq!(normalize_for_matching("Shadow of the Colossus"), "shadow of the colossus");
        assert_eq!(normalize_for_matching("FIFA 22"), "fifa 22");
    }

    #[test]
    fn test_match_tokens() {
        let tokens = match_tokens("The Witcher 3: Wild Hunt GOTY");
        let expected: Vec<&str> = vec!["the", "witcher", "3", "wild", "hunt"];
        assert_eq!(tokens.len(), expected.len());
        for t in expected {
            assert!(tokens.contains(t), "missing token {t:?}");
        }
        assert!(match_tokens("").is_empty());
        assert!(match_tokens("™®©").is_empty());
    }
}
