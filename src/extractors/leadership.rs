//! Text-only leadership and sheet-label extraction.
//!
//! Leadership fields are printed form labels, so they survive OCR far more
//! reliably than the hand-written grid and can be pulled from the flat text
//! with no geometry at all. Each label regex is whitespace- and
//! punctuation-tolerant and captures up to three following words; because
//! the `regex` crate has no lookahead, trailing captured words that are
//! themselves labels are trimmed off afterwards.

use lazy_static::lazy_static;
use regex::Regex;

use crate::roster::RosterMeta;
use crate::text::is_stop_word;

lazy_static! {
    static ref CHARGE_NURSE: Regex =
        Regex::new(r"(?i)charge[\s.:\-]*nurse\s*[:;\-]?\s*([A-Za-z]+(?:\s+[A-Za-z]+){0,2})")
            .unwrap();
    static ref MENTOR: Regex =
        Regex::new(r"(?i)(?:clinical[\s.:\-]*)?mentor\s*[:;\-]?\s*([A-Za-z]+(?:\s+[A-Za-z]+){0,2})")
            .unwrap();
    static ref CTA: Regex =
        Regex::new(r"(?i)\bcta\b\s*[:;\-]?\s*([A-Za-z]+(?:\s+[A-Za-z]+){0,2})").unwrap();
    static ref UNIT: Regex =
        Regex::new(r"(?i)\bunit\b\s*[:;\-]?\s*([A-Za-z0-9]+(?:\s+[A-Za-z]+){0,2})").unwrap();
    static ref DATE: Regex = Regex::new(r"\b\d{1,2}[/-]\d{1,2}(?:[/-]\d{2,4})?\b").unwrap();
}

/// Extract leadership and sheet-label fields from the full text.
///
/// Independent of geometry. Any label not found yields `None` for that
/// field; this is non-fatal.
pub fn parse_leadership(text: &str) -> RosterMeta {
    RosterMeta {
        charge_nurse: capture_name(&CHARGE_NURSE, text),
        resource_rn: capture_name(&MENTOR, text),
        cta: capture_name(&CTA, text),
        unit_label: capture_name(&UNIT, text),
        date_label: DATE.find(text).map(|m| m.as_str().to_string()),
    }
}

/// Run a label regex and clean the captured name.
///
/// The capture is greedy up to three words, so it can swallow the next
/// label on the same line ("Smith Clinical Mentor"); trailing tokens that
/// are stop-words are popped until a real name remains.
fn capture_name(pattern: &Regex, text: &str) -> Option<String> {
    let caps = pattern.captures(text)?;
    let mut tokens: Vec<&str> = caps.get(1)?.as_str().split_whitespace().collect();
    while tokens.last().is_some_and(|t| is_stop_word(t)) {
        tokens.pop();
    }
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}
