//! Per-room care level and acuity note extraction.
//!
//! Care level and notes are written in the sheet cells next to each room
//! number. A small probe box around the room token is inspected; its
//! horizontal extent is clamped to the owning band so detail text from a
//! neighboring RN's column is never read. Matching is data-driven: two
//! keyword tables of word-boundary regexes.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::ParserConfig;
use crate::geometry::Rect;
use crate::layout::Band;
use crate::roster::CareLevel;
use crate::words::{RoomToken, Word};

lazy_static! {
    /// Care-level keywords, checked in order; first match wins
    static ref CARE_LEVELS: Vec<(Regex, CareLevel)> = vec![
        (Regex::new(r"(?i)\btele\b").unwrap(), CareLevel::Tele),
        (Regex::new(r"(?i)\bmed[\s-]?surg\b").unwrap(), CareLevel::MedSurg),
        (Regex::new(r"(?i)\bms\b").unwrap(), CareLevel::MedSurg),
    ];

    /// Acuity note tags. TELE and MS are echoed as notes so the review UI
    /// still shows them when the care-level cell is ambiguous.
    static ref NOTE_TAGS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?i)\biso\b").unwrap(), "ISO"),
        (Regex::new(r"(?i)\bsitter\b").unwrap(), "SITTER"),
        (Regex::new(r"(?i)\bbg\b").unwrap(), "BG"),
        (Regex::new(r"(?i)\bnih\b").unwrap(), "NIH"),
        (Regex::new(r"(?i)\badmit\b").unwrap(), "ADMIT"),
        (Regex::new(r"(?i)\bdrip\b").unwrap(), "DRIP"),
        (Regex::new(r"(?i)\bq2\b").unwrap(), "Q2"),
        (Regex::new(r"(?i)\bheavy\b").unwrap(), "HEAVY"),
        (Regex::new(r"(?i)\btf\b").unwrap(), "TF"),
        (Regex::new(r"(?i)\btele\b").unwrap(), "TELE"),
        (Regex::new(r"(?i)\b(?:ms|med[\s-]?surg)\b").unwrap(), "MS"),
    ];
}

/// Infer care level and note tags for one assigned room.
///
/// The probe box extends from the room token by the configured paddings
/// (left pad, right fraction of page width, above/below) and is clamped to
/// the owning band's x-range. Words whose centers fall inside are joined
/// and matched against the keyword tables. Notes are de-duplicated in
/// first-match order.
pub fn parse_care_and_notes(
    words: &[Word],
    band: &Band,
    room: &RoomToken,
    width: f32,
    config: &ParserConfig,
) -> (Option<CareLevel>, Vec<String>) {
    let probe = Rect::new(
        room.bbox.x0 - config.detail_left_pad,
        room.bbox.y0 - config.detail_above,
        room.bbox.x1 + width * config.detail_right_frac,
        room.bbox.y1 + config.detail_below,
    )
    .clamp_x(band.left, band.right);

    let mut nearby: Vec<&Word> = words
        .iter()
        .filter(|w| probe.contains_point(&w.bbox().center()))
        .collect();
    nearby.sort_by(|a, b| a.y0.total_cmp(&b.y0).then(a.x0.total_cmp(&b.x0)));

    let text = nearby
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let care = CARE_LEVELS
        .iter()
        .find(|(pattern, _)| pattern.is_match(&text))
        .map(|(_, level)| *level);

    let mut notes: Vec<String> = vec![];
    for (pattern, tag) in NOTE_TAGS.iter() {
        if pattern.is_match(&text) && !notes.iter().any(|n| n == tag) {
            notes.push((*tag).to_string());
        }
    }

    (care, notes)
}
