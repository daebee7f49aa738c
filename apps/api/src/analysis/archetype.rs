//! Archetype Classifier — maps free text to a single descriptive archetype.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::prompts::{ARCHETYPE_SYSTEM, ARCHETYPE_TEMPERATURE};
use crate::llm_client::{recover_json, JsonRecovery, LlmClient};

/// The three fixed archetype categories the classifier must choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ArchetypeCategory {
    Design,
    Tech,
    Marketing,
}

/// One archetype classification. Immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypeRecord {
    pub archetype_title: String,
    pub archetype_category: ArchetypeCategory,
    /// Hex color string, e.g. "#00FF00".
    pub power_color: String,
    pub analysis_summary: String,
    pub future_prediction: String,
    pub key_skills: Vec<String>,
}

/// Soft-failure record: decode failures keep the raw response for diagnosis,
/// connection failures carry only a description.
#[derive(Debug, Clone, Serialize)]
pub struct ArchetypeFailure {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

/// Tagged outcome of one classifier call. Serializes untagged so the client
/// sees either the record fields or the `{error, raw_content}` shape — the
/// same nominal slot either way, per the no-crash propagation policy.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ArchetypeOutcome {
    Record(ArchetypeRecord),
    Failed(ArchetypeFailure),
}

impl ArchetypeOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ArchetypeOutcome::Failed(_))
    }
}

/// Runs one classification call. Single-shot: a failed call is a final
/// failure for this request, reported as a `Failed` outcome, never an error.
pub async fn classify_archetype(llm: &LlmClient, user_text: &str) -> ArchetypeOutcome {
    let user_prompt = format!("Analyze this data: {user_text}");

    let content = match llm
        .chat(
            ARCHETYPE_SYSTEM,
            &user_prompt,
            Some(ARCHETYPE_TEMPERATURE),
            None,
        )
        .await
    {
        Ok(content) => content,
        Err(e) => {
            warn!("archetype classification call failed: {e}");
            return ArchetypeOutcome::Failed(ArchetypeFailure {
                error: format!("Connection error: {e}"),
                raw_content: None,
            });
        }
    };

    // The model is not guaranteed to honor "JSON only": strict decode first,
    // then brace-scan recovery of the embedded object.
    match recover_json::<ArchetypeRecord>(&content) {
        JsonRecovery::Parsed(record) => ArchetypeOutcome::Record(record),
        JsonRecovery::Unparseable(raw) => {
            warn!("archetype response did not decode as JSON");
            ArchetypeOutcome::Failed(ArchetypeFailure {
                error: "Neural decoding error. The future is blurred.".to_string(),
                raw_content: Some(raw),
            })
        }
    }
}
