//! Extraction passes over words and text.
//!
//! - PCA region extraction (upper-region lines → name/count/rooms triples)
//! - per-room care level and acuity note tags
//! - text-only leadership/meta fields

pub mod leadership;
pub mod pca;
pub mod room_details;

pub use leadership::parse_leadership;
pub use pca::parse_pcas;
pub use room_details::parse_care_and_notes;
