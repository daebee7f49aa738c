use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Shared HTTP client for collector and link-probe traffic.
    /// The LLM client carries its own client with a longer timeout.
    pub http: reqwest::Client,
    pub config: Config,
}
