// Cross-cutting prompt fragments.
// Feature prompts live in a prompts.rs next to the feature that sends them.

/// Appended to every system instruction that expects structured output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
