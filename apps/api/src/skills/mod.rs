// Skills Assessment: slider ratings → model assessment plus table and chart data.
// The model never sees rating categories; those are display-only.

pub mod catalog;
pub mod charts;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod rating;
