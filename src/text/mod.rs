//! Text-level utilities shared across the extraction passes.

pub mod normalize;

pub use normalize::{find_room_codes, is_plausible_person_name, is_stop_word, normalize_token};
