//! Puzzle Validator: turns an untrusted generative payload into a `Puzzle`.
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. theme, keyword word/clue and the clue list are present and non-empty
//! 2. the keyword has no whitespace
//! 3. every horizontal clue has a word and clue, an in-range vertical index, and
//!    contains the vertical letter at that index (case-insensitive)
//!
//! When the shared letter occurs several times in a horizontal word, the layout
//! anchors on the first occurrence (see `layout::find_intersection`).

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::layout::find_intersection;
use crate::puzzle::models::{
    HorizontalClue, Puzzle, PuzzleKeyword, RawHorizontalClue, RawKeyword, RawPuzzle,
};

/// Recommended keyword length range. Outside it the puzzle is still accepted.
pub const RECOMMENDED_KEYWORD_LEN: std::ops::RangeInclusive<usize> = 8..=12;

/// Hard upper bound on any word's letter count. Keeps the grid allocation bounded.
pub const MAX_WORD_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid puzzle: {reason}")]
pub struct InvalidPuzzle {
    pub reason: String,
}

impl InvalidPuzzle {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Validates an arbitrary JSON value, rejecting payloads of the wrong shape.
pub fn validate_value(value: Value) -> Result<Puzzle, InvalidPuzzle> {
    let raw: RawPuzzle = serde_json::from_value(value)
        .map_err(|e| InvalidPuzzle::new(format!("malformed payload: {e}")))?;
    validate_puzzle(raw)
}

/// Validates a decoded payload. No partial puzzle is ever returned.
pub fn validate_puzzle(raw: RawPuzzle) -> Result<Puzzle, InvalidPuzzle> {
    let theme = required_text(raw.theme, "theme")?;

    let RawKeyword { word, clue } = raw
        .vertical_keyword
        .ok_or_else(|| InvalidPuzzle::new("vertical_keyword is missing"))?;
    let word = required_text(word, "vertical_keyword.word")?;
    let clue = required_text(clue, "vertical_keyword.clue")?;

    let raw_clues = raw
        .horizontal_clues
        .filter(|clues| !clues.is_empty())
        .ok_or_else(|| InvalidPuzzle::new("horizontal_clues is missing or empty"))?;

    if word.chars().any(char::is_whitespace) {
        return Err(InvalidPuzzle::new(format!(
            "vertical_keyword.word '{word}' contains whitespace"
        )));
    }

    let vertical: Vec<char> = word.chars().collect();
    if vertical.len() > MAX_WORD_LEN {
        return Err(InvalidPuzzle::new(format!(
            "vertical_keyword.word has {} letters (max {MAX_WORD_LEN})",
            vertical.len()
        )));
    }
    if !RECOMMENDED_KEYWORD_LEN.contains(&vertical.len()) {
        warn!(
            "Vertical keyword '{}' has {} letters (recommended {}-{})",
            word,
            vertical.len(),
            RECOMMENDED_KEYWORD_LEN.start(),
            RECOMMENDED_KEYWORD_LEN.end()
        );
    }

    let horizontal_clues = raw_clues
        .into_iter()
        .enumerate()
        .map(|(position, raw_clue)| validate_clue(position, raw_clue, &vertical))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Puzzle {
        theme,
        vertical_keyword: PuzzleKeyword { word, clue },
        horizontal_clues,
    })
}

fn validate_clue(
    position: usize,
    raw: RawHorizontalClue,
    vertical: &[char],
) -> Result<HorizontalClue, InvalidPuzzle> {
    let field = |name: &str| format!("horizontal_clues[{position}].{name}");

    let clue_number = raw
        .clue_number
        .ok_or_else(|| InvalidPuzzle::new(format!("{} is missing", field("clue_number"))))?;
    let word = required_text(raw.word, &field("word"))?;
    let clue = required_text(raw.clue, &field("clue"))?;

    if word.chars().any(char::is_whitespace) {
        return Err(InvalidPuzzle::new(format!(
            "{} '{word}' contains whitespace",
            field("word")
        )));
    }
    let letter_count = word.chars().count();
    if letter_count > MAX_WORD_LEN {
        return Err(InvalidPuzzle::new(format!(
            "{} has {letter_count} letters (max {MAX_WORD_LEN})",
            field("word")
        )));
    }

    let index = raw.intersection_index_vertical.ok_or_else(|| {
        InvalidPuzzle::new(format!(
            "{} is missing",
            field("intersection_index_vertical")
        ))
    })?;
    let index = usize::try_from(index)
        .ok()
        .filter(|&i| i < vertical.len())
        .ok_or_else(|| {
            InvalidPuzzle::new(format!(
                "{} = {index} is outside [0, {})",
                field("intersection_index_vertical"),
                vertical.len()
            ))
        })?;

    let letter = vertical[index];
    if find_intersection(&word, letter).is_none() {
        return Err(InvalidPuzzle::new(format!(
            "clue {clue_number}: '{word}' does not contain the intersection letter '{letter}'"
        )));
    }

    Ok(HorizontalClue {
        clue_number,
        word,
        clue,
        intersection_index_vertical: index,
    })
}

fn required_text(value: Option<String>, field: &str) -> Result<String, InvalidPuzzle> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        Some(_) => Err(InvalidPuzzle::new(format!("{field} is empty"))),
        None => Err(InvalidPuzzle::new(format!("{field} is missing"))),
    }
}
