//! The parse orchestrator.
//!
//! Sequences the extraction passes and assembles the final roster. Two
//! entry modes: text-only (no geometry — leadership plus a flat room scan)
//! and word-geometry (the full PCA and RN pipelines). The parser degrades
//! via the shape of its output and the [`ParseOutcome`] tag; it never
//! panics or errors on noisy real-world input.

use std::collections::HashSet;

use crate::config::ParserConfig;
use crate::error::Result;
use crate::extractors::{parse_care_and_notes, parse_leadership, parse_pcas};
use crate::layout::{assign_rooms_to_bands, compute_band_ranges, find_rn_anchors, NameAnchor};
use crate::roster::{ParseOutcome, ParsedRoster, RnAssignment, RoomAssignment};
use crate::text::find_room_codes;
use crate::words::{OcrText, ParseInput, RoomToken};

/// Name used for the fallback bucket when no RN anchors are found.
const FALLBACK_RN_NAME: &str = "RN";

/// Layout-aware roster parser.
///
/// Stateless between calls: each parse is a pure function of its input and
/// the configuration, so one parser may serve concurrent callers.
///
/// # Examples
///
/// ```
/// use roster_oxide::RosterParser;
///
/// let parser = RosterParser::new();
/// let roster = parser.parse("Charge Nurse: Smith");
/// assert_eq!(roster.meta.charge_nurse.as_deref(), Some("Smith"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RosterParser {
    config: ParserConfig,
}

impl RosterParser {
    /// Create a parser with the default layout priors.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with a custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse OCR/PDF-text output into a structured roster.
    ///
    /// Accepts anything convertible into [`ParseInput`]: a `&str` (text-only
    /// mode) or an [`OcrText`] (word-geometry mode). Always returns a
    /// roster; absence of data is represented by empty collections and
    /// `None` fields, never by an error.
    pub fn parse(&self, input: impl Into<ParseInput>) -> ParsedRoster {
        match input.into() {
            ParseInput::Text(text) => self.parse_text_only(&text),
            ParseInput::Ocr(ocr) => self.parse_with_geometry(&ocr),
        }
    }

    /// Decode collaborator JSON and parse it.
    ///
    /// The one entry point that can fail: structurally malformed JSON is a
    /// collaborator contract violation and is reported as an error rather
    /// than an empty roster.
    pub fn parse_json(&self, json: &str) -> Result<ParsedRoster> {
        let input = ParseInput::from_json(json)?;
        Ok(self.parse(input))
    }

    /// Text-only mode: leadership fields plus a flat room-token scan.
    fn parse_text_only(&self, text: &str) -> ParsedRoster {
        let meta = parse_leadership(text);

        let mut codes: Vec<String> = vec![];
        for code in find_room_codes(text, &self.config.room_grammar) {
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
        codes.sort();

        let rns = if codes.is_empty() {
            vec![]
        } else {
            vec![RnAssignment {
                name: FALLBACK_RN_NAME.to_string(),
                rooms: codes.into_iter().map(RoomAssignment::bare).collect(),
            }]
        };

        classify(ParsedRoster {
            outcome: ParseOutcome::LeadershipOnly,
            meta,
            pcas: vec![],
            rns,
        })
    }

    /// Word-geometry mode: the full PCA and RN pipelines.
    fn parse_with_geometry(&self, ocr: &OcrText) -> ParsedRoster {
        let meta = parse_leadership(&ocr.text);

        let Some((width, height)) = ocr.page_dimensions(self.config.min_inferred_extent) else {
            log::debug!("page dimensions not derivable, skipping geometric passes");
            return classify(ParsedRoster {
                outcome: ParseOutcome::LeadershipOnly,
                meta,
                pcas: vec![],
                rns: vec![],
            });
        };

        let pcas = parse_pcas(&ocr.words, height, &self.config);

        // Room tokens in the RN region
        let y_min = height * self.config.rn_region_top_frac;
        let y_max = height * self.config.rn_region_bottom_frac;
        let tokens: Vec<RoomToken> = ocr
            .words
            .iter()
            .filter(|w| w.y0 >= y_min && w.y0 <= y_max)
            .filter_map(|w| RoomToken::from_word(w, &self.config.room_grammar))
            .collect();

        let anchors = find_rn_anchors(&ocr.words, width, height, &self.config);
        let rns = if anchors.is_empty() {
            log::debug!("no RN anchors found, falling back to a single bucket");
            self.fallback_bucket(&tokens)
        } else {
            self.banded_assignments(ocr, &tokens, anchors, width)
        };

        classify(ParsedRoster {
            outcome: ParseOutcome::Full,
            meta,
            pcas,
            rns,
        })
    }

    /// One undifferentiated `"RN"` entry holding every detected room.
    fn fallback_bucket(&self, tokens: &[RoomToken]) -> Vec<RnAssignment> {
        let mut codes: Vec<String> = vec![];
        for token in tokens {
            if !codes.contains(&token.code) {
                codes.push(token.code.clone());
            }
        }
        codes.sort();

        if codes.is_empty() {
            vec![]
        } else {
            vec![RnAssignment {
                name: FALLBACK_RN_NAME.to_string(),
                rooms: codes.into_iter().map(RoomAssignment::bare).collect(),
            }]
        }
    }

    /// Band the page, assign rooms, and pull per-room details.
    ///
    /// Bands are walked left to right; `claimed` enforces the
    /// one-room-one-owner invariant even when noise buckets a
    /// boundary-straddling token under two anchors.
    fn banded_assignments(
        &self,
        ocr: &OcrText,
        tokens: &[RoomToken],
        anchors: Vec<NameAnchor>,
        width: f32,
    ) -> Vec<RnAssignment> {
        let bands = compute_band_ranges(anchors, width);
        let buckets = assign_rooms_to_bands(tokens, &bands);

        let mut claimed: HashSet<String> = HashSet::new();
        bands
            .iter()
            .zip(buckets)
            .map(|(band, bucket)| {
                let rooms = bucket
                    .into_iter()
                    .filter(|token| {
                        let fresh = claimed.insert(token.code.clone());
                        if !fresh {
                            log::debug!(
                                "room {} already claimed by an earlier band, skipping",
                                token.code
                            );
                        }
                        fresh
                    })
                    .map(|token| {
                        let (care, notes) =
                            parse_care_and_notes(&ocr.words, band, &token, width, &self.config);
                        RoomAssignment {
                            room: token.code,
                            level_of_care: care,
                            notes,
                        }
                    })
                    .collect();
                RnAssignment {
                    name: band.anchor.name.clone(),
                    rooms,
                }
            })
            .collect()
    }
}

/// Downgrade the outcome to `Empty` when nothing at all was extracted.
fn classify(mut roster: ParsedRoster) -> ParsedRoster {
    if roster.is_empty() {
        roster.outcome = ParseOutcome::Empty;
    }
    roster
}
