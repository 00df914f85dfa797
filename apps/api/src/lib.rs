//! Themed keyword crossword service.
//!
//! A generative backend proposes a puzzle, `puzzle::validation` checks it,
//! `layout` places it on a grid, and `session` tracks a player solving it.

pub mod config;
pub mod errors;
pub mod layout;
pub mod llm_client;
pub mod puzzle;
pub mod routes;
pub mod session;
pub mod state;
