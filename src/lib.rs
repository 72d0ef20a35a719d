//! # Roster Oxide
//!
//! Layout-aware roster extraction for scanned shift-assignment sheets.
//!
//! Charge nurses photograph a hand-designed assignment sheet; an OCR engine
//! (or a PDF text layer) turns it into a flat bag of words with bounding
//! boxes. This crate reconstructs the structure: which rooms belong to which
//! RN or PCA, each room's care level, and its acuity note tags.
//!
//! ## Pipeline
//!
//! - **Token normalization**: canonical room codes from OCR-corrupted text
//!   (`O`/`0`, `I`/`L`/`1`, trailing `B`/`8` confusions)
//! - **Upper region**: y-tolerance line grouping → PCA (name, count, rooms)
//!   triples
//! - **Lower region**: spatial clustering of name tokens into per-RN
//!   anchors → non-overlapping horizontal bands partitioning the page
//!   width → room-to-band assignment with a one-room-one-owner guarantee →
//!   per-room care/notes from a band-clamped probe box
//! - **Text-only pass**: leadership fields (charge nurse, mentor, CTA) and
//!   sheet labels from the flat text, no geometry needed
//!
//! The parser never fails on noisy input — it degrades through the
//! [`ParseOutcome`] tag and the shape of the returned roster. Layout priors
//! (region splits, clustering tolerances, the room-code grammar) are
//! [`ParserConfig`] fields tuned for one form family; retarget them per
//! deployment.
//!
//! ## Quick Start
//!
//! ```
//! use roster_oxide::{OcrText, RosterParser, Word};
//!
//! let parser = RosterParser::new();
//! let roster = parser.parse(OcrText {
//!     text: "Charge Nurse: Smith".to_string(),
//!     words: vec![Word::new("214B", 1400.0, 1600.0, 1480.0, 1640.0)],
//!     width: Some(2400.0),
//!     height: Some(3000.0),
//! });
//!
//! assert_eq!(roster.meta.charge_nurse.as_deref(), Some("Smith"));
//! // No plausible RN names on the page: every room lands in one bucket
//! assert_eq!(roster.rns[0].name, "RN");
//! assert_eq!(roster.rns[0].rooms[0].room, "214B");
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration and input model
pub mod config;
pub mod words;

// Geometry and text utilities
pub mod geometry;
pub mod text;

// Layout analysis (lines, anchors, bands)
pub mod layout;

// Extraction passes
pub mod extractors;

// Output model and orchestrator
pub mod parser;
pub mod roster;

pub use config::{ParserConfig, RoomGrammar};
pub use error::{Error, Result};
pub use parser::RosterParser;
pub use roster::{
    CareLevel, ParseOutcome, ParsedRoster, PcaAssignment, RnAssignment, RoomAssignment, RosterMeta,
};
pub use words::{OcrText, ParseInput, RoomToken, Word};
