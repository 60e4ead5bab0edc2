// Shared prompt fragments.
// Each feature that sends prompts defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments only.

/// Opening line for every advisor prompt.
pub const ADVISOR_PERSONA: &str = "You are a professional career advisor.";

/// Closing line asking for display-ready markdown.
pub const MARKDOWN_INSTRUCTION: &str =
    "Format the whole answer in markdown with clear headings and bullet points.";
