//! Puzzle data model: the untrusted wire shape and the validated domain types.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Wire shape (untrusted)
// ────────────────────────────────────────────────────────────────────────────

/// Puzzle payload exactly as the generative service returns it.
///
/// Every field is optional and indices are signed so that a payload with missing
/// or out-of-range values still deserializes and can be rejected with a reason.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPuzzle {
    pub theme: Option<String>,
    pub vertical_keyword: Option<RawKeyword>,
    pub horizontal_clues: Option<Vec<RawHorizontalClue>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawKeyword {
    pub word: Option<String>,
    pub clue: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawHorizontalClue {
    pub clue_number: Option<i64>,
    pub word: Option<String>,
    pub clue: Option<String>,
    pub intersection_index_vertical: Option<i64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Validated domain types
// ────────────────────────────────────────────────────────────────────────────

/// The vertical keyword placed down a single grid column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleKeyword {
    pub word: String,
    pub clue: String,
}

/// A horizontal answer crossing the vertical keyword at one letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorizontalClue {
    /// Display ordering only; not required to be contiguous or unique.
    pub clue_number: i64,
    pub word: String,
    pub clue: String,
    /// 0-based index into the vertical keyword.
    pub intersection_index_vertical: usize,
}

/// A structurally valid puzzle. Only `validation::validate_puzzle` builds these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub theme: String,
    pub vertical_keyword: PuzzleKeyword,
    /// Insertion order is kept for stable tie-breaking.
    pub horizontal_clues: Vec<HorizontalClue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_puzzle_tolerates_missing_fields() {
        let raw: RawPuzzle = serde_json::from_str(r#"{"theme": "Space"}"#).unwrap();
        assert_eq!(raw.theme.as_deref(), Some("Space"));
        assert!(raw.vertical_keyword.is_none());
        assert!(raw.horizontal_clues.is_none());
    }

    #[test]
    fn test_raw_clue_accepts_negative_index() {
        let raw: RawHorizontalClue =
            serde_json::from_str(r#"{"word": "MARS", "intersection_index_vertical": -1}"#)
                .unwrap();
        assert_eq!(raw.intersection_index_vertical, Some(-1));
    }
}
