// All LLM prompt constants for puzzle generation.
// Reuses cross-cutting fragments from llm_client::prompts.

use serde_json::{json, Value};

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Prompt template for puzzle generation. `{theme}` is replaced per request.
pub const PUZZLE_PROMPT_TEMPLATE: &str = "\
Create a keyword crossword in the style of a TV quiz-show final round, following these rules:
1. Theme: {theme}.
2. Vertical keyword: 8 to 12 letters, closely tied to the theme, written without spaces.
3. Horizontal words: each relates to the theme and crosses the vertical keyword at exactly one letter. \
`intersection_index_vertical` is the 0-based position of that letter in the vertical keyword, \
and the letter must appear in the horizontal word. Horizontal words contain no spaces.
4. Use each vertical position at most once.
5. Clues: clever and quiz-like, never containing the answer word.
6. Format: follow the JSON structure provided exactly.";

/// Builds the generation prompt for one theme.
pub fn build_puzzle_prompt(theme: &str) -> String {
    format!(
        "{}\n\n{}",
        PUZZLE_PROMPT_TEMPLATE.replace("{theme}", theme),
        JSON_ONLY_INSTRUCTION
    )
}

/// Response schema handed to the model. Field names match `RawPuzzle`.
pub fn puzzle_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "theme": {
                "type": "STRING",
                "description": "Overall theme of the crossword."
            },
            "vertical_keyword": {
                "type": "OBJECT",
                "properties": {
                    "word": { "type": "STRING" },
                    "clue": { "type": "STRING" }
                },
                "required": ["word", "clue"]
            },
            "horizontal_clues": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "clue_number": { "type": "INTEGER" },
                        "word": { "type": "STRING" },
                        "clue": { "type": "STRING" },
                        "intersection_index_vertical": {
                            "type": "INTEGER",
                            "description": "0-based index of the letter in the vertical keyword where this word crosses it."
                        }
                    },
                    "required": ["clue_number", "word", "clue", "intersection_index_vertical"]
                }
            }
        },
        "required": ["theme", "vertical_keyword", "horizontal_clues"]
    })
}
