// Career Advisor: free-text profile → personalized career guidance.

pub mod handlers;
pub mod models;
pub mod prompts;
