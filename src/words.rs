//! Input model: OCR/PDF-text words and the parser's entry shapes.
//!
//! The OCR engine and the PDF text layer are external collaborators; both
//! hand over the same shape — full text plus a flat list of words with
//! bounding boxes — typically as JSON. Everything here is an immutable value
//! object scoped to a single parse call.

use serde::{Deserialize, Serialize};

use crate::config::RoomGrammar;
use crate::error::{Error, Result};
use crate::geometry::Rect;

/// One OCR/PDF-text token with its bounding box in page space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Raw token text as the engine reported it
    pub text: String,
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
    /// Recognition confidence, 0–100. Reported by OCR engines, absent for
    /// PDF text layers. Carried for the contract; no heuristic consults it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conf: Option<f32>,
}

impl Word {
    /// Create a word from text and corner coordinates.
    pub fn new(text: impl Into<String>, x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            text: text.into(),
            x0,
            y0,
            x1,
            y1,
            conf: None,
        }
    }

    /// The word's bounding box.
    pub fn bbox(&self) -> Rect {
        Rect::new(self.x0, self.y0, self.x1, self.y1)
    }

    /// X coordinate of the word's center.
    pub fn x_center(&self) -> f32 {
        (self.x0 + self.x1) / 2.0
    }
}

/// A word recognized (after normalization) as a valid room code.
///
/// Keeps the originating bounding box for later proximity queries.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomToken {
    /// Normalized room code, e.g. `214B`
    pub code: String,
    /// Bounding box of the source word
    pub bbox: Rect,
}

impl RoomToken {
    /// Recognize a word as a room token under the given grammar.
    pub fn from_word(word: &Word, grammar: &RoomGrammar) -> Option<Self> {
        grammar.recognize(&word.text).map(|code| Self {
            code,
            bbox: word.bbox(),
        })
    }
}

/// The canonical OCR/PDF-text result shape accepted by the parser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OcrText {
    /// Full extracted text
    #[serde(default)]
    pub text: String,
    /// Word list with geometry
    #[serde(default)]
    pub words: Vec<Word>,
    /// Page width, if the engine reported it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Page height, if the engine reported it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl OcrText {
    /// Resolve the page dimensions.
    ///
    /// Supplied dimensions are used when positive. A missing dimension is
    /// inferred as the maximum `x1`/`y1` extent over all words, and the
    /// inferred value is only trusted above `min_extent` — a guard against
    /// degenerate single-character inputs. Returns `None` when either
    /// dimension cannot be derived; the caller then skips the geometric
    /// passes.
    pub fn page_dimensions(&self, min_extent: f32) -> Option<(f32, f32)> {
        let width = match self.width.filter(|w| *w > 0.0) {
            Some(w) => w,
            None => {
                let max_x = self.words.iter().map(|w| w.x1).fold(0.0_f32, f32::max);
                if max_x <= min_extent {
                    return None;
                }
                max_x
            },
        };
        let height = match self.height.filter(|h| *h > 0.0) {
            Some(h) => h,
            None => {
                let max_y = self.words.iter().map(|w| w.y1).fold(0.0_f32, f32::max);
                if max_y <= min_extent {
                    return None;
                }
                max_y
            },
        };
        Some((width, height))
    }
}

/// Input accepted by the parse orchestrator.
#[derive(Debug, Clone)]
pub enum ParseInput {
    /// Raw extracted text with no geometry (minimal OCR output)
    Text(String),
    /// Full OCR/PDF-text result with word geometry
    Ocr(OcrText),
}

impl From<&str> for ParseInput {
    fn from(text: &str) -> Self {
        ParseInput::Text(text.to_string())
    }
}

impl From<String> for ParseInput {
    fn from(text: String) -> Self {
        ParseInput::Text(text)
    }
}

impl From<OcrText> for ParseInput {
    fn from(ocr: OcrText) -> Self {
        ParseInput::Ocr(ocr)
    }
}

impl ParseInput {
    /// Decode collaborator JSON into a parse input.
    ///
    /// Accepts either a JSON string (text-only mode) or an object with the
    /// `OcrText` shape. Anything else is a collaborator contract violation
    /// and fails fast with a descriptive error.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        match value {
            serde_json::Value::String(text) => Ok(ParseInput::Text(text)),
            serde_json::Value::Object(_) => {
                let ocr: OcrText = serde_json::from_value(value)?;
                Ok(ParseInput::Ocr(ocr))
            },
            other => Err(Error::MalformedInput(format!(
                "expected a string or an OCR result object, found {}",
                match other {
                    serde_json::Value::Null => "null",
                    serde_json::Value::Bool(_) => "a boolean",
                    serde_json::Value::Number(_) => "a number",
                    serde_json::Value::Array(_) => "an array",
                    _ => "an unsupported value",
                }
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_bbox_and_center() {
        let w = Word::new("214B", 10.0, 20.0, 50.0, 40.0);
        assert_eq!(w.bbox(), Rect::new(10.0, 20.0, 50.0, 40.0));
        assert_eq!(w.x_center(), 30.0);
    }

    #[test]
    fn test_room_token_recognition() {
        let grammar = RoomGrammar::default();
        let hit = Word::new("2I4B", 0.0, 0.0, 30.0, 12.0);
        let miss = Word::new("Smith", 0.0, 0.0, 30.0, 12.0);
        let token = RoomToken::from_word(&hit, &grammar).unwrap();
        assert_eq!(token.code, "214B");
        assert_eq!(token.bbox, hit.bbox());
        assert!(RoomToken::from_word(&miss, &grammar).is_none());
    }

    #[test]
    fn test_page_dimensions_supplied() {
        let ocr = OcrText {
            width: Some(800.0),
            height: Some(1000.0),
            ..Default::default()
        };
        assert_eq!(ocr.page_dimensions(100.0), Some((800.0, 1000.0)));
    }

    #[test]
    fn test_page_dimensions_inferred_from_words() {
        let ocr = OcrText {
            words: vec![
                Word::new("a", 0.0, 0.0, 700.0, 12.0),
                Word::new("b", 0.0, 900.0, 50.0, 950.0),
            ],
            ..Default::default()
        };
        assert_eq!(ocr.page_dimensions(100.0), Some((700.0, 950.0)));
    }

    #[test]
    fn test_page_dimensions_degenerate_guard() {
        // Largest extent is below the guard: dimensions are not derivable
        let ocr = OcrText {
            words: vec![Word::new("a", 0.0, 0.0, 9.0, 12.0)],
            ..Default::default()
        };
        assert_eq!(ocr.page_dimensions(100.0), None);
        // No words at all
        assert_eq!(OcrText::default().page_dimensions(100.0), None);
    }

    #[test]
    fn test_from_json_string() {
        let input = ParseInput::from_json("\"Charge Nurse: Smith\"").unwrap();
        assert!(matches!(input, ParseInput::Text(t) if t == "Charge Nurse: Smith"));
    }

    #[test]
    fn test_from_json_object() {
        let json = r#"{
            "text": "214 Tele",
            "words": [{"text": "214", "x0": 1.0, "y0": 2.0, "x1": 30.0, "y1": 14.0, "conf": 91.5}],
            "width": 800
        }"#;
        let input = ParseInput::from_json(json).unwrap();
        match input {
            ParseInput::Ocr(ocr) => {
                assert_eq!(ocr.words.len(), 1);
                assert_eq!(ocr.words[0].conf, Some(91.5));
                assert_eq!(ocr.width, Some(800.0));
                assert_eq!(ocr.height, None);
            },
            ParseInput::Text(_) => panic!("expected OCR input"),
        }
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        let err = ParseInput::from_json("42").unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
        assert!(ParseInput::from_json("[1, 2]").is_err());
        assert!(ParseInput::from_json("not json at all").is_err());
    }

    #[test]
    fn test_word_json_round_trip() {
        let w = Word::new("228A", 1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&w).unwrap();
        // conf is omitted when absent
        assert!(!json.contains("conf"));
        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }
}
