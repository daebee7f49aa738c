/// LLM Client — the single point of entry for all OpenRouter calls in Futura.
///
/// ARCHITECTURAL RULE: No other module may call the chat-completions API
/// directly. All LLM interactions MUST go through this module.
///
/// Calls are single-shot: the classifier and the simulator both treat one
/// failed call as a final failure for that request, so there is no retry
/// loop here.
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<&'a serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: Option<u64>,
    completion_tokens: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Outcome of lenient JSON recovery over free-text LLM output.
///
/// Strict decoding is attempted first; if the model wrapped the object in
/// chatter, the substring between the first `{` and the last `}` is retried.
/// An unparseable response keeps the raw text for diagnosis instead of
/// collapsing into an untyped map.
#[derive(Debug)]
pub enum JsonRecovery<T> {
    Parsed(T),
    Unparseable(String),
}

/// The single LLM client used by all services in Futura.
/// Wraps an OpenAI-compatible chat-completions endpoint (OpenRouter).
#[derive(Clone)]
pub struct LlmClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes one chat-completion call and returns the assistant text.
    ///
    /// `response_format` is passed through verbatim; the Trajectory
    /// Simulator uses it to request schema-constrained generation.
    pub async fn chat(
        &self,
        system: &str,
        user: &str,
        temperature: Option<f32>,
        response_format: Option<&serde_json::Value>,
    ) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
            response_format,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Recover the provider's message when the envelope parses
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;

        if let Some(usage) = &chat.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={:?}, completion_tokens={:?}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        chat.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .ok_or(LlmError::EmptyContent)
    }

    /// Calls the LLM and strictly deserializes the text response as JSON.
    /// Only usable with schema-constrained generation, where the API
    /// guarantees the shape; free-text callers go through `recover_json`.
    pub async fn chat_structured<T: DeserializeOwned>(
        &self,
        system: &str,
        user: &str,
        response_format: &serde_json::Value,
    ) -> Result<T, LlmError> {
        let text = self.chat(system, user, None, Some(response_format)).await?;
        serde_json::from_str(&text).map_err(LlmError::Parse)
    }
}

/// Two-phase lenient decode of free-text LLM output.
pub fn recover_json<T: DeserializeOwned>(text: &str) -> JsonRecovery<T> {
    if let Ok(value) = serde_json::from_str::<T>(text) {
        return JsonRecovery::Parsed(value);
    }
    if let Some(candidate) = extract_json_object(text) {
        if let Ok(value) = serde_json::from_str::<T>(candidate) {
            return JsonRecovery::Parsed(value);
        }
    }
    JsonRecovery::Unparseable(text.to_string())
}

/// Returns the substring between the first `{` and the last `}`, inclusive.
/// Models sometimes surround the JSON object with chatter; this strips it.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Probe {
        key: String,
    }

    #[test]
    fn test_extract_json_object_strips_chatter() {
        let input = "Sure! {\"key\": \"value\"} Hope this helps!";
        assert_eq!(extract_json_object(input), Some("{\"key\": \"value\"}"));
    }

    #[test]
    fn test_extract_json_object_no_braces() {
        assert_eq!(extract_json_object("no json here"), None);
    }

    #[test]
    fn test_extract_json_object_reversed_braces() {
        assert_eq!(extract_json_object("} backwards {"), None);
    }

    #[test]
    fn test_recover_json_strict_first() {
        let input = "{\"key\": \"value\"}";
        match recover_json::<Probe>(input) {
            JsonRecovery::Parsed(p) => assert_eq!(p.key, "value"),
            JsonRecovery::Unparseable(raw) => panic!("strict parse failed: {raw}"),
        }
    }

    #[test]
    fn test_recover_json_falls_back_to_brace_scan() {
        let input = "Here you go:\n{\"key\": \"value\"}\nLet me know!";
        match recover_json::<Probe>(input) {
            JsonRecovery::Parsed(p) => assert_eq!(p.key, "value"),
            JsonRecovery::Unparseable(raw) => panic!("brace scan failed: {raw}"),
        }
    }

    #[test]
    fn test_recover_json_keeps_raw_on_failure() {
        let input = "The future is cloudy today.";
        match recover_json::<Probe>(input) {
            JsonRecovery::Parsed(_) => panic!("should not parse"),
            JsonRecovery::Unparseable(raw) => assert_eq!(raw, input),
        }
    }
}
