//! Token normalization and name plausibility heuristics.
//!
//! OCR output from photographed assignment sheets confuses a handful of
//! glyphs reliably: `O`/`0`, `I`/`L`/`1`, and a trailing `B` read as `8`.
//! Room codes come from a closed numeric grammar where letters never
//! legitimately appear except as a trailing bed suffix, so the confusion
//! repair is applied to whole tokens.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::RoomGrammar;

lazy_static! {
    /// Room-like substrings before normalization: three room digits (possibly
    /// misread as O/I/L) and an optional bed suffix (possibly misread as 8).
    static ref ROOM_CANDIDATE: Regex = Regex::new(r"(?i)\b[0-9OIL]{3}[AB8]?\b").unwrap();

    /// Words that appear on the sheets as table headers, shift labels, or tag
    /// abbreviations — never as person names.
    static ref STOP_WORDS: HashSet<&'static str> = [
        // Table headers and form labels
        "ROOM", "ROOMS", "NAME", "NOTES", "CARE", "LEVEL", "TOTAL", "CENSUS",
        "UNIT", "DATE", "SHIFT", "ASSIGNMENT", "ASSIGNMENTS",
        // Roles and leadership labels
        "RN", "PCA", "CNA", "CTA", "CHARGE", "NURSE", "MENTOR", "CLINICAL",
        "RESOURCE",
        // Shift labels
        "DAY", "NIGHT", "AM", "PM", "LUNCH", "BREAK",
        // Care levels and acuity tag abbreviations
        "TELE", "MS", "MED", "SURG", "ISO", "SITTER", "BG", "NIH", "ADMIT",
        "DRIP", "HEAVY", "TF", "Q2",
    ]
    .iter()
    .copied()
    .collect();
}

/// Normalize a raw OCR token into canonical form.
///
/// Upper-cases, strips leading/trailing non-alphanumerics, then repairs the
/// common confusions: every `O` becomes `0`, every `I` or `L` becomes `1`,
/// and a trailing `8` becomes `B` when the rest of the token is a three-digit
/// room prefix. Pure, total, and idempotent; never panics.
///
/// # Examples
///
/// ```
/// use roster_oxide::text::normalize_token;
///
/// assert_eq!(normalize_token("2I4B"), "214B");
/// assert_eq!(normalize_token("2L4B"), "214B");
/// assert_eq!(normalize_token("2O4B"), "214B");
/// assert_eq!(normalize_token(" 214b,"), "214B");
/// assert_eq!(normalize_token("2148"), "214B");
/// ```
pub fn normalize_token(raw: &str) -> String {
    let trimmed = raw
        .trim()
        .trim_matches(|c: char| !c.is_ascii_alphanumeric());

    let mut repaired: Vec<char> = trimmed
        .to_uppercase()
        .chars()
        .map(|c| match c {
            'O' => '0',
            'I' | 'L' => '1',
            other => other,
        })
        .collect();

    // Trailing bed suffix misread as 8, e.g. "2148" for "214B"
    if repaired.len() == 4
        && repaired[3] == '8'
        && repaired[..3].iter().all(|c| c.is_ascii_digit())
    {
        repaired[3] = 'B';
    }

    repaired.into_iter().collect()
}

/// Find all valid room codes in a run of text, in order of appearance.
///
/// Scans for room-like substrings, normalizes each, and keeps those the
/// grammar accepts. Duplicates are preserved; callers de-duplicate under
/// their own ownership rules.
pub fn find_room_codes(text: &str, grammar: &RoomGrammar) -> Vec<String> {
    ROOM_CANDIDATE
        .find_iter(text)
        .filter_map(|m| {
            let normalized = normalize_token(m.as_str());
            grammar.is_valid(&normalized).then_some(normalized)
        })
        .collect()
}

/// Check whether a token is a known header/label/tag word rather than a name.
pub fn is_stop_word(token: &str) -> bool {
    let cleaned = token
        .trim_matches(|c: char| !c.is_ascii_alphanumeric())
        .to_uppercase();
    STOP_WORDS.contains(cleaned.as_str())
}

/// Heuristic filter rejecting OCR noise and table-header fragments as names.
///
/// A plausible person name has at least two alphabetic tokens, or a single
/// alphabetic token of length ≥ 5.
///
/// # Examples
///
/// ```
/// use roster_oxide::text::is_plausible_person_name;
///
/// assert!(is_plausible_person_name("Jones"));
/// assert!(is_plausible_person_name("Kim Lee"));
/// assert!(!is_plausible_person_name("AB"));
/// assert!(!is_plausible_person_name(""));
/// ```
pub fn is_plausible_person_name(name: &str) -> bool {
    let alpha_tokens: Vec<&str> = name
        .split_whitespace()
        .filter(|t| !t.is_empty() && t.chars().all(|c| c.is_alphabetic()))
        .collect();

    match alpha_tokens.len() {
        0 => false,
        1 => alpha_tokens[0].chars().count() >= 5,
        _ => true,
    }
}
