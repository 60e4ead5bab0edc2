// Learning Resources: field + resource type → exactly five recommendations.

pub mod handlers;
pub mod models;
pub mod prompts;
