//! Trajectory Simulator — three speculative career paths at fixed
//! probability tiers, produced through schema-constrained generation.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::prompts::{trajectory_response_format, CTS_SYSTEM, CTS_USER_TEMPLATE};
use crate::llm_client::LlmClient;

/// Fixed probability tiers, one per path typology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbabilityTier {
    High,
    Medium,
    Low,
}

/// One speculative future role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory {
    pub title: String,
    pub probability: ProbabilityTier,
    pub description: String,
    pub hypothetical_project: String,
}

/// The full simulation: either all four fields are populated and
/// schema-valid, or the whole result is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Single sentence defining the user's technical/creative synthesis.
    pub core_vector: String,
    pub trajectory_strategic: Trajectory,
    pub trajectory_challenge: Trajectory,
    pub trajectory_visionary: Trajectory,
}

/// Runs one simulation call. Any failure — transport, API, schema
/// validation — is converted to `None`; callers must treat `None` as
/// "generation failed", never as an empty-but-valid report.
pub async fn simulate_trajectories(
    llm: &LlmClient,
    cv_text: &str,
    personality_text: &str,
    github_data: &str,
    web_data: &str,
) -> Option<SimulationResult> {
    let user_prompt = CTS_USER_TEMPLATE
        .replace("{cv_text}", cv_text)
        .replace("{personality_text}", personality_text)
        .replace("{github_data}", github_data)
        .replace("{web_data}", web_data);

    let response_format = trajectory_response_format();

    match llm
        .chat_structured::<SimulationResult>(CTS_SYSTEM, &user_prompt, &response_format)
        .await
    {
        Ok(result) => Some(result),
        Err(e) => {
            warn!("trajectory simulation failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trajectory_json(tier: &str) -> String {
        format!(
            r#"{{"title": "AI Interface Orchestrator", "probability": "{tier}", "description": "d", "hypothetical_project": "h"}}"#
        )
    }

    #[test]
    fn test_full_simulation_deserializes() {
        let json = format!(
            r#"{{
                "core_vector": "Code meets design.",
                "trajectory_strategic": {s},
                "trajectory_challenge": {c},
                "trajectory_visionary": {v}
            }}"#,
            s = trajectory_json("High"),
            c = trajectory_json("Medium"),
            v = trajectory_json("Low"),
        );

        let result: SimulationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.core_vector, "Code meets design.");
        assert_eq!(result.trajectory_strategic.probability, ProbabilityTier::High);
        assert_eq!(result.trajectory_challenge.probability, ProbabilityTier::Medium);
        assert_eq!(result.trajectory_visionary.probability, ProbabilityTier::Low);
    }

    #[test]
    fn test_missing_trajectory_is_a_hard_decode_failure() {
        // No partial results: a response missing one substructure must fail
        // wholesale, which the call boundary converts to None.
        let json = format!(
            r#"{{
                "core_vector": "Incomplete.",
                "trajectory_strategic": {s},
                "trajectory_challenge": {c}
            }}"#,
            s = trajectory_json("High"),
            c = trajectory_json("Medium"),
        );
        assert!(serde_json::from_str::<SimulationResult>(&json).is_err());
    }

    #[test]
    fn test_missing_trajectory_field_is_a_hard_decode_failure() {
        let json = r#"{"title": "X", "probability": "High", "description": "d"}"#;
        assert!(serde_json::from_str::<Trajectory>(json).is_err());
    }

    #[test]
    fn test_probability_tier_serde() {
        assert_eq!(
            serde_json::to_string(&ProbabilityTier::High).unwrap(),
            r#""High""#
        );
        let tier: ProbabilityTier = serde_json::from_str(r#""Low""#).unwrap();
        assert_eq!(tier, ProbabilityTier::Low);
        assert!(serde_json::from_str::<ProbabilityTier>(r#""Certain""#).is_err());
    }
}
