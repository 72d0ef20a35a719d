//! Configuration for roster parsing.
//!
//! Every layout prior the parser relies on — region split fractions,
//! clustering tolerances, detail-box paddings, the anchor cap — is a field
//! here rather than a literal in the passes. The defaults are tuned against
//! one family of hand-designed assignment sheets (PCA block in the upper
//! region, RN grid in the lower region); retargeting the parser to another
//! layout is a matter of configuration, not code changes.

use crate::error::{Error, Result};

/// The room-code grammar for one deployment.
///
/// A normalized token is a valid room code when its numeric part falls in
/// `[min_room, max_room]` and any trailing letter is one of the allowed
/// suffixes. The default covers the original unit's 200–228 range with
/// optional A/B bed suffixes (the `^2(0\d|1\d|2[0-8])[AB]?$` grammar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomGrammar {
    /// Lowest valid room number
    pub min_room: u16,
    /// Highest valid room number
    pub max_room: u16,
    /// Allowed single-letter bed suffixes
    pub suffixes: Vec<char>,
}

impl Default for RoomGrammar {
    fn default() -> Self {
        Self {
            min_room: 200,
            max_room: 228,
            suffixes: vec!['A', 'B'],
        }
    }
}

impl RoomGrammar {
    /// Create a grammar for a different room range.
    pub fn new(min_room: u16, max_room: u16, suffixes: Vec<char>) -> Self {
        Self {
            min_room,
            max_room,
            suffixes,
        }
    }

    /// Check whether an already-normalized token is a valid room code.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_oxide::config::RoomGrammar;
    ///
    /// let grammar = RoomGrammar::default();
    /// assert!(grammar.is_valid("214B"));
    /// assert!(grammar.is_valid("200"));
    /// assert!(grammar.is_valid("228A"));
    /// assert!(!grammar.is_valid("199"));
    /// assert!(!grammar.is_valid("229"));
    /// assert!(!grammar.is_valid("214C"));
    /// ```
    pub fn is_valid(&self, token: &str) -> bool {
        let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
        let rest: String = token.chars().skip(digits.chars().count()).collect();

        if digits.is_empty() {
            return false;
        }
        // A leading zero means the token is not a plain room number
        if digits.len() > 1 && digits.starts_with('0') {
            return false;
        }
        let number: u16 = match digits.parse() {
            Ok(n) => n,
            Err(_) => return false,
        };
        if number < self.min_room || number > self.max_room {
            return false;
        }

        match rest.chars().count() {
            0 => true,
            1 => rest.chars().all(|c| self.suffixes.contains(&c)),
            _ => false,
        }
    }

    /// Normalize a raw OCR token and return it as a room code if valid.
    pub fn recognize(&self, raw: &str) -> Option<String> {
        let normalized = crate::text::normalize::normalize_token(raw);
        if self.is_valid(&normalized) {
            Some(normalized)
        } else {
            None
        }
    }
}

/// Roster parser configuration.
///
/// Defaults reproduce the priors the original layout was tuned with. All
/// fractions are of page width or height as noted.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Room-code grammar for this deployment
    pub room_grammar: RoomGrammar,

    /// Vertical tolerance (px) when grouping words into lines
    pub line_y_tolerance: f32,

    /// The PCA block occupies the top fraction of page height
    pub pca_region_frac: f32,

    /// Top of the RN region, as a fraction of page height
    pub rn_region_top_frac: f32,

    /// Bottom of the RN region, as a fraction of page height
    pub rn_region_bottom_frac: f32,

    /// RN name tokens sit within the left fraction of page width
    pub rn_name_left_frac: f32,

    /// X-center tolerance for anchor column clustering, as a fraction of width
    pub anchor_x_tolerance_frac: f32,

    /// Y tolerance (px) for isolating one name-row per RN within a column
    pub anchor_y_tolerance: f32,

    /// Sanity cap on the number of RN anchors per sheet
    pub max_anchors: usize,

    /// Detail box: extension (px) left of the room token
    pub detail_left_pad: f32,

    /// Detail box: extension right of the room token, as a fraction of width
    pub detail_right_frac: f32,

    /// Detail box: extension (px) above the room token
    pub detail_above: f32,

    /// Detail box: extension (px) below the room token
    pub detail_below: f32,

    /// Minimum extent an inferred page dimension must exceed to be trusted
    pub min_inferred_extent: f32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            room_grammar: RoomGrammar::default(),
            line_y_tolerance: 14.0,
            pca_region_frac: 0.42,
            rn_region_top_frac: 0.45,
            rn_region_bottom_frac: 0.95,
            rn_name_left_frac: 0.45,
            anchor_x_tolerance_frac: 0.04,
            anchor_y_tolerance: 22.0,
            max_anchors: 10,
            detail_left_pad: 10.0,
            detail_right_frac: 0.26,
            detail_above: 22.0,
            detail_below: 30.0,
            min_inferred_extent: 100.0,
        }
    }
}

impl ParserConfig {
    /// Create a configuration with the default layout priors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different room-code grammar.
    pub fn with_room_grammar(mut self, grammar: RoomGrammar) -> Self {
        self.room_grammar = grammar;
        self
    }

    /// Set the line grouping y-tolerance.
    pub fn with_line_y_tolerance(mut self, tolerance: f32) -> Self {
        self.line_y_tolerance = tolerance;
        self
    }

    /// Set the PCA region fraction.
    pub fn with_pca_region_frac(mut self, frac: f32) -> Self {
        self.pca_region_frac = frac;
        self
    }

    /// Set the RN region bounds as fractions of page height.
    pub fn with_rn_region(mut self, top_frac: f32, bottom_frac: f32) -> Self {
        self.rn_region_top_frac = top_frac;
        self.rn_region_bottom_frac = bottom_frac;
        self
    }

    /// Set the anchor cap.
    pub fn with_max_anchors(mut self, max_anchors: usize) -> Self {
        self.max_anchors = max_anchors;
        self
    }

    /// Validate the configuration.
    ///
    /// Returns [`Error::InvalidConfig`] for values the passes cannot work
    /// with: fractions outside `(0, 1]`, an inverted room range or RN region,
    /// non-positive tolerances, or a zero anchor cap.
    pub fn validate(&self) -> Result<()> {
        fn check_frac(name: &str, value: f32) -> Result<()> {
            if value > 0.0 && value <= 1.0 {
                Ok(())
            } else {
                Err(Error::InvalidConfig(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                )))
            }
        }

        check_frac("pca_region_frac", self.pca_region_frac)?;
        check_frac("rn_region_top_frac", self.rn_region_top_frac)?;
        check_frac("rn_region_bottom_frac", self.rn_region_bottom_frac)?;
        check_frac("rn_name_left_frac", self.rn_name_left_frac)?;
        check_frac("anchor_x_tolerance_frac", self.anchor_x_tolerance_frac)?;
        check_frac("detail_right_frac", self.detail_right_frac)?;

        if self.rn_region_top_frac >= self.rn_region_bottom_frac {
            return Err(Error::InvalidConfig(format!(
                "rn_region_top_frac ({}) must be below rn_region_bottom_frac ({})",
                self.rn_region_top_frac, self.rn_region_bottom_frac
            )));
        }
        if self.room_grammar.min_room > self.room_grammar.max_room {
            return Err(Error::InvalidConfig(format!(
                "room range is inverted: {}..{}",
                self.room_grammar.min_room, self.room_grammar.max_room
            )));
        }
        if self.line_y_tolerance <= 0.0 || self.anchor_y_tolerance <= 0.0 {
            return Err(Error::InvalidConfig(
                "clustering tolerances must be positive".to_string(),
            ));
        }
        if self.max_anchors == 0 {
            return Err(Error::InvalidConfig(
                "max_anchors must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grammar_bounds() {
        let grammar = RoomGrammar::default();
        assert!(grammar.is_valid("200"));
        assert!(grammar.is_valid("228"));
        assert!(grammar.is_valid("214B"));
        assert!(grammar.is_valid("228A"));
        assert!(!grammar.is_valid("199"));
        assert!(!grammar.is_valid("229"));
        assert!(!grammar.is_valid("214C"));
        assert!(!grammar.is_valid("21"));
        assert!(!grammar.is_valid("2140"));
        assert!(!grammar.is_valid(""));
        assert!(!grammar.is_valid("ABC"));
    }

    #[test]
    fn test_grammar_rejects_leading_zero() {
        // "0214" parses to 214 but is not a plain room number
        assert!(!RoomGrammar::default().is_valid("0214"));
    }

    #[test]
    fn test_retargeted_grammar() {
        let grammar = RoomGrammar::new(300, 350, vec!['A', 'B', 'C']);
        assert!(grammar.is_valid("312C"));
        assert!(!grammar.is_valid("214B"));
    }

    #[test]
    fn test_recognize_normalizes() {
        let grammar = RoomGrammar::default();
        assert_eq!(grammar.recognize("2I4B"), Some("214B".to_string()));
        assert_eq!(grammar.recognize(" 214b,"), Some("214B".to_string()));
        assert_eq!(grammar.recognize("hello"), None);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ParserConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_frac() {
        let config = ParserConfig::default().with_pca_region_frac(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_rn_region() {
        let config = ParserConfig::default().with_rn_region(0.9, 0.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_room_range() {
        let config =
            ParserConfig::default().with_room_grammar(RoomGrammar::new(300, 200, vec!['A']));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_anchor_cap() {
        let config = ParserConfig::default().with_max_anchors(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_chain() {
        let config = ParserConfig::new()
            .with_line_y_tolerance(10.0)
            .with_pca_region_frac(0.5)
            .with_rn_region(0.5, 0.9)
            .with_max_anchors(6);
        assert_eq!(config.line_y_tolerance, 10.0);
        assert_eq!(config.pca_region_frac, 0.5);
        assert_eq!(config.rn_region_top_frac, 0.5);
        assert_eq!(config.max_anchors, 6);
    }
}
