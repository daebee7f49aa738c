// Analysis pipeline: validation gates, footprint collection, and the two
// LLM calls (archetype classification + trajectory simulation).
// All LLM calls go through llm_client — no direct API calls here.

pub mod archetype;
pub mod handlers;
pub mod prompts;
pub mod trajectory;

use serde::{Deserialize, Serialize};

use crate::analysis::archetype::{classify_archetype, ArchetypeOutcome};
use crate::analysis::trajectory::{simulate_trajectories, SimulationResult};
use crate::errors::AppError;
use crate::footprint::{collect_github_digest, collect_web_digest, validate_optional_link};
use crate::session::{AnalysisSession, SessionState, TransitionError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    #[serde(default)]
    pub personality_text: String,
    #[serde(default)]
    pub github_username: String,
    /// Comma/newline-separated URL fragments for the web collector.
    #[serde(default)]
    pub web_links: String,
    /// Optional single link gated by the validator before analysis starts.
    #[serde(default)]
    pub portfolio_link: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub session_state: SessionState,
    pub archetype: ArchetypeOutcome,
    /// Absent when generation failed; never an empty-but-valid report.
    pub simulation: Option<SimulationResult>,
    pub github_digest: String,
    pub web_digest: String,
}

/// Full analysis pipeline over an explicit session state machine.
///
/// Input-validation failures return a 400 with a specific reason. Upstream
/// failures degrade inside the report (diagnostic digests, failed archetype
/// outcome, absent simulation) and still complete with a 200.
pub async fn run_analysis(
    state: &AppState,
    request: &AnalyzeRequest,
) -> Result<AnalysisReport, AppError> {
    let mut session = AnalysisSession::new();
    session.receive_input().map_err(fsm_error)?;
    session.begin_validation().map_err(fsm_error)?;

    if request.resume_text.trim().is_empty() {
        session
            .fail("resume text is required")
            .map_err(fsm_error)?;
        return Err(AppError::Validation(
            "Please provide the résumé text to proceed".to_string(),
        ));
    }

    // Gate check: the pipeline blocks here and the reason is surfaced
    // verbatim so the user can correct or clear the field.
    let verdict = validate_optional_link(&state.http, &request.portfolio_link).await;
    if !verdict.is_valid {
        let reason = verdict
            .reason
            .unwrap_or_else(|| "unknown reason".to_string());
        session.fail(reason.as_str()).map_err(fsm_error)?;
        return Err(AppError::Validation(format!(
            "Invalid portfolio link: {reason}. Correct it or clear the field."
        )));
    }

    session.begin_analysis().map_err(fsm_error)?;

    // The gated portfolio link feeds the web collector along with the
    // free-form links field. The collectors are independent: fan out and join.
    let web_sources = footprint_sources(&request.web_links, &request.portfolio_link);
    let (github_digest, web_digest) = tokio::join!(
        collect_github_digest(
            &state.http,
            &state.config.github_api_base,
            &state.config.github_raw_base,
            &request.github_username,
        ),
        collect_web_digest(&state.http, &state.config.reader_proxy_base, &web_sources),
    );

    // So are the two LLM calls: the classifier sees personality + CV, the
    // simulator additionally sees the footprint digests.
    let classifier_input = format!("{} {}", request.personality_text, request.resume_text);
    let (archetype, simulation) = tokio::join!(
        classify_archetype(&state.llm, &classifier_input),
        simulate_trajectories(
            &state.llm,
            &request.resume_text,
            &request.personality_text,
            &github_digest,
            &web_digest,
        ),
    );

    if archetype.is_failure() {
        tracing::warn!("archetype classification degraded for this request");
    }
    if simulation.is_none() {
        tracing::warn!("trajectory simulation absent for this request");
    }

    session.complete().map_err(fsm_error)?;

    Ok(AnalysisReport {
        session_state: session.state().clone(),
        archetype,
        simulation,
        github_digest,
        web_digest,
    })
}

fn fsm_error(e: TransitionError) -> AppError {
    AppError::Internal(anyhow::Error::new(e))
}

/// Combines the free-form web-links field with the validated portfolio link
/// into one collector input. The link is skipped when it is already listed.
fn footprint_sources(web_links: &str, portfolio_link: &str) -> String {
    let web_links = web_links.trim();
    let portfolio_link = portfolio_link.trim();
    if portfolio_link.is_empty() || web_links.contains(portfolio_link) {
        web_links.to_string()
    } else if web_links.is_empty() {
        portfolio_link.to_string()
    } else {
        format!("{web_links}\n{portfolio_link}")
    }
}
