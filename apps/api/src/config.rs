use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup aborts if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenRouter bearer key. Required — the service cannot run without it.
    pub openrouter_api_key: String,
    /// OpenRouter chat-completions base URL.
    pub openrouter_base_url: String,
    /// Model identifier sent with every LLM call.
    pub llm_model: String,
    /// GitHub REST API base. Overridable so tests can point at fixtures.
    pub github_api_base: String,
    /// Raw content host for README lookups.
    pub github_raw_base: String,
    /// Text-extraction proxy that returns cleaned page text for a target URL.
    pub reader_proxy_base: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openrouter_api_key: require_env("OPENROUTER_API_KEY")?,
            openrouter_base_url: env_or("OPENROUTER_BASE_URL", "https://openrouter.ai/api/v1"),
            llm_model: env_or("LLM_MODEL", "openai/gpt-4o-mini"),
            github_api_base: env_or("GITHUB_API_BASE", "https://api.github.com"),
            github_raw_base: env_or("GITHUB_RAW_BASE", "https://raw.githubusercontent.com"),
            reader_proxy_base: env_or("READER_PROXY_BASE", "https://r.jina.ai"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| default.to_string())
}
