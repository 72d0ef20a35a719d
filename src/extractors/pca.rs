//! PCA block extraction from the upper page region.
//!
//! The PCA block is a short run of hand-written rows near the top of the
//! sheet: a name, an optional patient count, and a list of rooms. Rows are
//! reconstructed as text lines and mined with token heuristics — a line with
//! fewer than two room codes is too weak a signal to be a PCA row.

use std::collections::HashSet;

use crate::config::ParserConfig;
use crate::layout::group_words_into_lines;
use crate::roster::PcaAssignment;
use crate::text::{find_room_codes, is_plausible_person_name, is_stop_word};
use crate::words::Word;

/// Extract PCA assignments from words in the upper page region.
///
/// Lines are built from words whose `y0` falls within the configured top
/// fraction of the page height. Per line: all valid room codes are
/// collected (at least two required); the declared count is a standalone
/// 1–9 digit preceding the room list, defaulting to the extracted room
/// count; the name is the line text before the count/first room, cleaned
/// through the stop-word filter and checked for person-name plausibility.
/// Duplicate (name, room-set) pairs are suppressed; output is sorted by
/// name.
pub fn parse_pcas(words: &[Word], height: f32, config: &ParserConfig) -> Vec<PcaAssignment> {
    let y_limit = height * config.pca_region_frac;
    let region: Vec<&Word> = words.iter().filter(|w| w.y0 <= y_limit).collect();
    let lines = group_words_into_lines(&region, config.line_y_tolerance);

    let mut seen: HashSet<(String, Vec<String>)> = HashSet::new();
    let mut pcas: Vec<PcaAssignment> = vec![];

    for line in &lines {
        let mut rooms: Vec<String> = vec![];
        for code in find_room_codes(&line.text, &config.room_grammar) {
            if !rooms.contains(&code) {
                rooms.push(code);
            }
        }
        if rooms.len() < 2 {
            continue;
        }

        let first_room_index = line
            .words
            .iter()
            .position(|w| !find_room_codes(&w.text, &config.room_grammar).is_empty());
        let Some(first_room_index) = first_room_index else {
            // Room codes came from across word boundaries; no name cut point
            continue;
        };

        // Declared count: the last standalone 1-9 digit before the room list
        let mut count_index = None;
        for (i, word) in line.words[..first_room_index].iter().enumerate() {
            let token = word
                .text
                .trim_matches(|c: char| !c.is_ascii_alphanumeric());
            if token.len() == 1 && token.chars().all(|c| ('1'..='9').contains(&c)) {
                count_index = Some(i);
            }
        }
        let count = count_index
            .and_then(|i| {
                line.words[i]
                    .text
                    .trim_matches(|c: char| !c.is_ascii_alphanumeric())
                    .parse::<usize>()
                    .ok()
            })
            .unwrap_or(rooms.len());

        let name_end = count_index.unwrap_or(first_room_index);
        let name_tokens: Vec<&str> = line.words[..name_end]
            .iter()
            .map(|w| w.text.trim_matches(|c: char| !c.is_ascii_alphanumeric()))
            .filter(|t| !t.is_empty() && t.chars().all(|c| c.is_alphabetic()))
            .filter(|t| !is_stop_word(t))
            .collect();
        let name = name_tokens.join(" ");
        if !is_plausible_person_name(&name) {
            log::trace!("pca line rejected, implausible name {:?}: {}", name, line.text);
            continue;
        }

        let mut room_set = rooms.clone();
        room_set.sort();
        if !seen.insert((name.clone(), room_set)) {
            continue;
        }

        pcas.push(PcaAssignment { name, count, rooms });
    }

    pcas.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!("extracted {} PCA assignments", pcas.len());
    pcas
}
