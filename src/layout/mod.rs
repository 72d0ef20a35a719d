//! Layout analysis for scanned assignment sheets.
//!
//! This module turns the flat OCR word bag into structure:
//! - y-tolerance clustering of words into text lines (upper-region parsing)
//! - spatial clustering of name tokens into per-RN anchors
//! - partitioning of the page width into per-RN bands
//! - assignment of room tokens to bands by x-center containment

pub mod anchors;
pub mod bands;
pub mod lines;

// Re-export main types
pub use anchors::{find_rn_anchors, NameAnchor};
pub use bands::{assign_rooms_to_bands, compute_band_ranges, Band};
pub use lines::{group_words_into_lines, Line};
