//! Link Validator — reachability gate for the optional portfolio link.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::footprint::web::normalize_url;

/// Portfolio hosts block obvious bots; a common desktop browser UA gets the
/// probe through.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of the reachability probe. When invalid, `reason` carries a
/// human-readable explanation to surface to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkVerdict {
    pub is_valid: bool,
    pub reason: Option<String>,
}

impl LinkVerdict {
    fn valid() -> Self {
        Self {
            is_valid: true,
            reason: None,
        }
    }

    fn invalid(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Probes a user-supplied URL with one bounded GET.
///
/// Empty input is valid ("nothing to check"). A missing scheme is
/// auto-corrected before probing. This is a synchronous gate: callers block
/// the downstream pipeline on it and surface the reason verbatim.
pub async fn validate_optional_link(http: &Client, url: &str) -> LinkVerdict {
    let url = url.trim();
    if url.is_empty() {
        return LinkVerdict::valid();
    }

    let url = normalize_url(url);

    match http
        .get(&url)
        .header("User-Agent", BROWSER_USER_AGENT)
        .timeout(PROBE_TIMEOUT)
        .send()
        .await
    {
        Ok(response) if response.status() == reqwest::StatusCode::OK => LinkVerdict::valid(),
        Ok(response) => LinkVerdict::invalid(status_reason(response.status().as_u16())),
        Err(e) => LinkVerdict::invalid(error_reason(&e)),
    }
}

/// Non-200 statuses map to a single reason format shown to the user.
fn status_reason(status: u16) -> String {
    format!("Server Error {status}")
}

/// Distinct reason strings per transport failure class.
fn error_reason(error: &reqwest::Error) -> String {
    if error.is_builder() {
        "Malformed URL".to_string()
    } else if error.is_timeout() || error.is_connect() {
        "Site unreachable".to_string()
    } else {
        error.to_string()
    }
}
