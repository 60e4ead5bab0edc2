use anyhow::{bail, Context, Result};

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// Startup fails if the Gemini API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    /// Optional `thinkingBudget` for models that support it. Not sent when unset.
    pub thinking_budget: Option<u32>,
    /// When set, the career advice form also requires hobbies.
    pub require_hobbies: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_api_key("GEMINI_API_KEY")?,
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string()),
            thinking_budget: std::env::var("GEMINI_THINKING_BUDGET")
                .ok()
                .map(|v| v.parse::<u32>())
                .transpose()
                .context("GEMINI_THINKING_BUDGET must be a non-negative integer")?,
            require_hobbies: parse_flag(std::env::var("REQUIRE_HOBBIES").ok().as_deref())?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            gemini_api_key: "test-key".to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            thinking_budget: None,
            require_hobbies: false,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}

/// An empty key counts as missing.
fn require_api_key(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => bail!("API key not found. Please set the {key} environment variable."),
    }
}

fn parse_flag(value: Option<&str>) -> Result<bool> {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(false),
        Some(v) => match v.as_str() {
            "" | "0" | "false" | "no" | "off" => Ok(false),
            "1" | "true" | "yes" | "on" => Ok(true),
            other => bail!("REQUIRE_HOBBIES must be a boolean, got '{other}'"),
        },
    }
}
