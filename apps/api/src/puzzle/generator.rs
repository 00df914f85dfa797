//! Puzzle Generation: orchestrates the full generation pipeline.
//!
//! Flow: source.fetch(theme) → validate_value → build_layout → response.
//!
//! Runs end-to-end on the request task. The generative call is the only await
//! point; it is attempted once and its failure is returned as-is.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::layout::{build_layout, Layout, Placement};
use crate::llm_client::{LlmClient, LlmError};
use crate::puzzle::models::{HorizontalClue, Puzzle, PuzzleKeyword};
use crate::puzzle::prompts::{build_puzzle_prompt, puzzle_response_schema};
use crate::puzzle::validation::validate_value;

// ────────────────────────────────────────────────────────────────────────────
// Puzzle source seam
// ────────────────────────────────────────────────────────────────────────────

/// Anything that can produce an untrusted puzzle payload for a theme.
#[async_trait]
pub trait PuzzleSource: Send + Sync {
    async fn fetch(&self, theme: &str) -> Result<Value, LlmError>;
}

/// Production source: asks Gemini for a puzzle under the fixed response schema.
#[async_trait]
impl PuzzleSource for LlmClient {
    async fn fetch(&self, theme: &str) -> Result<Value, LlmError> {
        let prompt = build_puzzle_prompt(theme);
        self.call_json(&prompt, &puzzle_response_schema()).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

/// A horizontal clue with its computed placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedClue {
    pub clue_number: i64,
    pub word: String,
    pub clue: String,
    pub intersection_index_vertical: usize,
    pub intersection_index_horizontal: usize,
    pub start_column: usize,
}

/// Grid as sent to renderers. `cells` is row-major, `null` marks blocked cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridView {
    pub rows: usize,
    pub cols: usize,
    pub vertical_column: usize,
    pub cells: Vec<Vec<Option<String>>>,
}

/// Response for one generated puzzle. `horizontal_clues` is in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    pub theme: String,
    pub vertical_keyword: PuzzleKeyword,
    pub horizontal_clues: Vec<PlacedClue>,
    pub grid: GridView,
    pub generated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Fetches, validates and lays out a puzzle for `theme`.
///
/// Nothing is returned unless every stage succeeds.
pub async fn generate_puzzle(
    source: &dyn PuzzleSource,
    theme: &str,
) -> Result<GeneratedPuzzle, AppError> {
    info!("Generating puzzle for theme \"{theme}\"...");

    let payload = source.fetch(theme).await?;
    let puzzle = validate_value(payload)?;
    let layout = build_layout(&puzzle)?;

    info!(
        "Puzzle generated: keyword {} letters, {} clues, grid {}x{}",
        puzzle.vertical_keyword.word.chars().count(),
        puzzle.horizontal_clues.len(),
        layout.grid.rows(),
        layout.grid.cols()
    );
    debug!("Grid:\n{}", layout.grid);

    Ok(assemble_response(puzzle, layout))
}

fn assemble_response(puzzle: Puzzle, layout: Layout) -> GeneratedPuzzle {
    // Placements follow the puzzle's clue order one-to-one.
    let mut horizontal_clues: Vec<PlacedClue> = puzzle
        .horizontal_clues
        .into_iter()
        .zip(layout.placements)
        .map(|(clue, placement)| placed_clue(clue, placement))
        .collect();
    horizontal_clues.sort_by_key(|c| c.clue_number);

    let grid = &layout.grid;
    GeneratedPuzzle {
        theme: puzzle.theme,
        vertical_keyword: puzzle.vertical_keyword,
        horizontal_clues,
        grid: GridView {
            rows: grid.rows(),
            cols: grid.cols(),
            vertical_column: grid.vertical_column(),
            cells: grid.to_matrix(),
        },
        generated_at: Utc::now(),
    }
}

fn placed_clue(clue: HorizontalClue, placement: Placement) -> PlacedClue {
    PlacedClue {
        clue_number: clue.clue_number,
        word: clue.word,
        clue: clue.clue,
        intersection_index_vertical: clue.intersection_index_vertical,
        intersection_index_horizontal: placement.intersection_index_horizontal,
        start_column: placement.start_column,
    }
}
