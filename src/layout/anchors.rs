//! RN name-anchor detection.
//!
//! In the lower region of the sheet, each RN's name sits at the head of a
//! column of rooms. Candidate name tokens are clustered spatially — first
//! into vertical columns by x-center, then by y within a column to isolate
//! one name-row per RN. Each surviving row becomes one [`NameAnchor`], the
//! seed for a band.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::ParserConfig;
use crate::geometry::Point;
use crate::text::{is_plausible_person_name, is_stop_word};
use crate::words::Word;

lazy_static! {
    /// Parenthesized short code next to a name, e.g. `(EDG)`
    static ref PAREN_CODE: Regex = Regex::new(r"\(([A-Za-z]{2,5})\)").unwrap();
}

/// A candidate RN identity: a display name and the centroid of the word
/// cluster it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct NameAnchor {
    /// 1–2 alphabetic tokens, plus an optional parenthesized short code
    pub name: String,
    /// Centroid averaged over the constituent words
    pub centroid: Point,
}

/// Detect RN name anchors in the lower region of the page.
///
/// Restricts to words whose `y0` lies within the configured RN region and
/// whose x-center falls in the left fraction of the width (names precede
/// room lists in this layout). Candidates are clustered into columns by
/// x-center, sub-clustered by y, filtered through the stop-word list and the
/// person-name plausibility check, de-duplicated, and capped at the
/// configured maximum staffing count while preserving left-to-right order.
///
/// Zero anchors is a legal outcome; the orchestrator falls back to a single
/// undifferentiated bucket.
pub fn find_rn_anchors(
    words: &[Word],
    width: f32,
    height: f32,
    config: &ParserConfig,
) -> Vec<NameAnchor> {
    let y_min = height * config.rn_region_top_frac;
    let y_max = height * config.rn_region_bottom_frac;
    let x_limit = width * config.rn_name_left_frac;

    let mut candidates: Vec<&Word> = words
        .iter()
        .filter(|w| w.y0 >= y_min && w.y0 <= y_max)
        .filter(|w| w.x_center() <= x_limit)
        .filter(|w| w.text.chars().any(|c| c.is_alphabetic()))
        .collect();
    candidates.sort_by(|a, b| a.x_center().total_cmp(&b.x_center()));

    // Columns: sweep the x-sorted candidates, comparing against the running
    // mean x-center of the current column
    let x_tolerance = width * config.anchor_x_tolerance_frac;
    let mut columns: Vec<(Vec<&Word>, f32)> = vec![];
    for word in candidates {
        let xc = word.x_center();
        match columns.last_mut() {
            Some((column, mean)) if (xc - *mean).abs() <= x_tolerance => {
                column.push(word);
                *mean += (xc - *mean) / column.len() as f32;
            },
            _ => columns.push((vec![word], xc)),
        }
    }

    let mut anchors: Vec<NameAnchor> = vec![];
    let mut seen: HashSet<(i64, i64)> = HashSet::new();

    for (mut column, _) in columns {
        column.sort_by(|a, b| a.y0.total_cmp(&b.y0).then(a.x0.total_cmp(&b.x0)));

        // One name-row per RN within the column
        let mut rows: Vec<Vec<&Word>> = vec![];
        for word in column {
            match rows.last_mut() {
                Some(row) if (word.y0 - row[0].y0).abs() <= config.anchor_y_tolerance => {
                    row.push(word);
                },
                _ => rows.push(vec![word]),
            }
        }

        for row in rows {
            let Some(anchor) = anchor_from_row(&row) else {
                continue;
            };
            let key = (
                anchor.centroid.x.round() as i64,
                anchor.centroid.y.round() as i64,
            );
            if seen.insert(key) {
                anchors.push(anchor);
            }
        }
    }

    anchors.sort_by(|a, b| {
        a.centroid
            .x
            .total_cmp(&b.centroid.x)
            .then(a.centroid.y.total_cmp(&b.centroid.y))
    });
    if anchors.len() > config.max_anchors {
        log::debug!(
            "capping {} anchors at {} (implausible staffing count)",
            anchors.len(),
            config.max_anchors
        );
        anchors.truncate(config.max_anchors);
    }

    log::debug!("found {} RN anchors", anchors.len());
    anchors
}

/// Build an anchor from one name-row of words, left to right.
///
/// Collects up to two alphabetic tokens (stop-words excluded) and an
/// optional parenthesized short code. The plausibility filter applies to the
/// alphabetic portion only; rows that fail it are dropped.
fn anchor_from_row(row: &[&Word]) -> Option<NameAnchor> {
    let mut sorted: Vec<&Word> = row.to_vec();
    sorted.sort_by(|a, b| a.x0.total_cmp(&b.x0));

    let mut alpha_tokens: Vec<&str> = vec![];
    let mut short_code: Option<String> = None;
    let mut constituents: Vec<&Word> = vec![];

    for word in sorted {
        if short_code.is_none() {
            if let Some(caps) = PAREN_CODE.captures(&word.text) {
                short_code = Some(caps[1].to_uppercase());
                constituents.push(word);
                continue;
            }
        }

        let cleaned = word
            .text
            .trim_matches(|c: char| !c.is_ascii_alphanumeric());
        if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_alphabetic()) {
            continue;
        }
        if is_stop_word(cleaned) {
            log::trace!("anchor row: dropping stop word {:?}", cleaned);
            continue;
        }
        // OCR sometimes reports the same word twice at the same position
        if alpha_tokens
            .last()
            .is_some_and(|last| last.eq_ignore_ascii_case(cleaned))
        {
            continue;
        }
        if alpha_tokens.len() < 2 {
            alpha_tokens.push(cleaned);
            constituents.push(word);
        }
    }

    let alpha_name = alpha_tokens.join(" ");
    if !is_plausible_person_name(&alpha_name) {
        if !alpha_name.is_empty() {
            log::trace!("anchor row: implausible name {:?}", alpha_name);
        }
        return None;
    }

    let n = constituents.len() as f32;
    let centroid = Point::new(
        constituents.iter().map(|w| w.bbox().center().x).sum::<f32>() / n,
        constituents.iter().map(|w| w.bbox().center().y).sum::<f32>() / n,
    );

    let name = match short_code {
        Some(code) => format!("{} ({})", alpha_name, code),
        None => alpha_name,
    };

    Some(NameAnchor { name, centroid })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, x: f32, y: f32) -> Word {
        Word::new(text, x, y, x + 40.0, y + 14.0)
    }

    // 2400x3000 scan: RN region is y in [1350, 2850], names left of x=1080,
    // column x-tolerance 96
    const WIDTH: f32 = 2400.0;
    const HEIGHT: f32 = 3000.0;

    #[test]
    fn test_single_anchor_two_tokens() {
        let words = vec![word("Kim", 40.0, 1500.0), word("Lee", 90.0, 1502.0)];
        let anchors = find_rn_anchors(&words, WIDTH, HEIGHT, &ParserConfig::default());

        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].name, "Kim Lee");
    }

    #[test]
    fn test_anchor_with_short_code() {
        let words = vec![word("Edgar", 40.0, 1500.0), word("(EDG)", 90.0, 1501.0)];
        let anchors = find_rn_anchors(&words, WIDTH, HEIGHT, &ParserConfig::default());

        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].name, "Edgar (EDG)");
    }

    #[test]
    fn test_implausible_single_token_rejected() {
        let words = vec![word("AB", 40.0, 1500.0)];
        assert!(find_rn_anchors(&words, WIDTH, HEIGHT, &ParserConfig::default()).is_empty());
    }

    #[test]
    fn test_stop_words_never_become_anchors() {
        let words = vec![
            word("CHARGE", 40.0, 1500.0),
            word("NURSE", 90.0, 1500.0),
            word("SITTER", 40.0, 1560.0),
        ];
        assert!(find_rn_anchors(&words, WIDTH, HEIGHT, &ParserConfig::default()).is_empty());
    }

    #[test]
    fn test_words_outside_region_ignored() {
        // Above the RN region
        let upper = word("Johnson", 40.0, 100.0);
        // Right of the name region
        let right = word("Johnson", 1300.0, 1500.0);
        let words = vec![upper, right];
        assert!(find_rn_anchors(&words, WIDTH, HEIGHT, &ParserConfig::default()).is_empty());
    }

    #[test]
    fn test_columns_yield_separate_anchors_sorted_by_x() {
        let words = vec![
            word("Garcia", 500.0, 1500.0),
            word("Nguyen", 40.0, 1505.0),
        ];
        let anchors = find_rn_anchors(&words, WIDTH, HEIGHT, &ParserConfig::default());

        assert_eq!(anchors.len(), 2);
        assert_eq!(anchors[0].name, "Nguyen");
        assert_eq!(anchors[1].name, "Garcia");
        assert!(anchors[0].centroid.x < anchors[1].centroid.x);
    }

    #[test]
    fn test_rows_within_column_split_by_y() {
        let words = vec![
            word("Garcia", 40.0, 1500.0),
            word("Nguyen", 40.0, 1580.0),
        ];
        let anchors = find_rn_anchors(&words, WIDTH, HEIGHT, &ParserConfig::default());
        assert_eq!(anchors.len(), 2);
    }

    #[test]
    fn test_duplicate_anchor_positions_deduplicated() {
        // Identical rounded centroid: keep one
        let a = word("Garcia", 40.0, 1500.0);
        let b = a.clone();
        let anchors = find_rn_anchors(&[a, b], WIDTH, HEIGHT, &ParserConfig::default());
        assert_eq!(anchors.len(), 1);
    }

    #[test]
    fn test_anchor_cap_preserves_left_to_right_order() {
        let config = ParserConfig::default().with_max_anchors(2);
        let words = vec![
            word("Adams", 40.0, 1500.0),
            word("Baker", 400.0, 1500.0),
            word("Clark", 800.0, 1500.0),
        ];
        let anchors = find_rn_anchors(&words, WIDTH, HEIGHT, &config);

        assert_eq!(anchors.len(), 2);
        assert_eq!(anchors[0].name, "Adams");
        assert_eq!(anchors[1].name, "Baker");
    }

    #[test]
    fn test_room_tokens_do_not_pollute_names() {
        let words = vec![word("Garcia", 40.0, 1500.0), word("214B", 42.0, 1502.0)];
        let anchors = find_rn_anchors(&words, WIDTH, HEIGHT, &ParserConfig::default());
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].name, "Garcia");
    }
}
