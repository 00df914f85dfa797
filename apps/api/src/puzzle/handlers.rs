//! Axum route handlers for the Puzzle API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::puzzle::generator::{generate_puzzle, GeneratedPuzzle};
use crate::state::AppState;

/// Longest theme forwarded to the generative service.
pub const MAX_THEME_CHARS: usize = 200;

#[derive(Debug, Default, Deserialize)]
pub struct ThemeQuery {
    pub theme: Option<String>,
}

impl ThemeQuery {
    /// The requested theme, or `default` when absent or blank.
    pub fn theme_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.theme
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(default)
    }
}

/// GET /api/generate-puzzle?theme=T
///
/// Generates, validates and lays out a fresh puzzle for the theme.
pub async fn handle_generate_puzzle(
    State(state): State<AppState>,
    Query(query): Query<ThemeQuery>,
) -> Result<Json<GeneratedPuzzle>, AppError> {
    let theme = query.theme_or(&state.config.default_theme);
    if theme.chars().count() > MAX_THEME_CHARS {
        return Err(AppError::Validation(format!(
            "theme must be at most {MAX_THEME_CHARS} characters"
        )));
    }
    let puzzle = generate_puzzle(state.source.as_ref(), theme).await?;
    Ok(Json(puzzle))
}
