//! Band construction and room-to-band assignment.
//!
//! A band is the horizontal x-range of the page attributed to one RN.
//! Consecutive band boundaries meet at the midpoint between their anchors'
//! centroids, the first band starts at 0, and the last ends at the page
//! width: bands partition `[0, width)` with no gaps or overlaps.

use crate::layout::anchors::NameAnchor;
use crate::words::RoomToken;

/// One anchor plus its derived x-range.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    /// The RN anchor seeding this band
    pub anchor: NameAnchor,
    /// Left boundary (inclusive)
    pub left: f32,
    /// Right boundary (exclusive)
    pub right: f32,
}

impl Band {
    /// Check if an x coordinate falls inside this band's `[left, right)`.
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.left && x < self.right
    }
}

/// Convert anchors (sorted by centroid x ascending) into contiguous bands.
///
/// Pure function of the anchor centroids; O(n).
///
/// # Examples
///
/// ```
/// use roster_oxide::geometry::Point;
/// use roster_oxide::layout::{compute_band_ranges, NameAnchor};
///
/// let anchors = vec![
///     NameAnchor { name: "Adams".to_string(), centroid: Point::new(100.0, 500.0) },
///     NameAnchor { name: "Baker".to_string(), centroid: Point::new(500.0, 500.0) },
/// ];
/// let bands = compute_band_ranges(anchors, 800.0);
///
/// assert_eq!(bands[0].left, 0.0);
/// assert_eq!(bands[0].right, 300.0);
/// assert_eq!(bands[1].left, 300.0);
/// assert_eq!(bands[1].right, 800.0);
/// ```
pub fn compute_band_ranges(anchors: Vec<NameAnchor>, width: f32) -> Vec<Band> {
    let centroids: Vec<f32> = anchors.iter().map(|a| a.centroid.x).collect();
    let last = anchors.len().saturating_sub(1);

    anchors
        .into_iter()
        .enumerate()
        .map(|(i, anchor)| {
            let left = if i == 0 {
                0.0
            } else {
                (centroids[i - 1] + centroids[i]) / 2.0
            };
            let right = if i == last {
                width
            } else {
                (centroids[i] + centroids[i + 1]) / 2.0
            };
            Band {
                anchor,
                left,
                right,
            }
        })
        .collect()
}

/// Assign room tokens to bands by x-center containment.
///
/// Returns one bucket per band index. Within a band, tokens are
/// de-duplicated by room code (first occurrence wins). Global one-owner
/// de-duplication across bands is the orchestrator's job — a token
/// straddling a boundary can legitimately land here in only one bucket, but
/// OCR noise may still produce the same code near two anchors.
pub fn assign_rooms_to_bands(tokens: &[RoomToken], bands: &[Band]) -> Vec<Vec<RoomToken>> {
    let mut buckets: Vec<Vec<RoomToken>> = vec![vec![]; bands.len()];

    for token in tokens {
        let xc = token.bbox.x_center();
        let Some(index) = bands.iter().position(|b| b.contains_x(xc)) else {
            log::trace!("room {} at x={} falls outside all bands", token.code, xc);
            continue;
        };
        let bucket = &mut buckets[index];
        if bucket.iter().any(|t| t.code == token.code) {
            continue;
        }
        bucket.push(token.clone());
    }

    buckets
}
