// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments only.

/// Instruction appended to every prompt that expects structured output.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Respond with a single JSON object matching the provided schema. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";
