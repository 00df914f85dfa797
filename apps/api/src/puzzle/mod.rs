// Puzzle generation: generative fetch, validation, and the HTTP handler.
// All LLM calls go through llm_client; no direct API calls here.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod validation;
