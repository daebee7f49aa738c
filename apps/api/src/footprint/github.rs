//! GitHub collector — digests a user's most recently updated public repos.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::footprint::truncate_chars;

/// How many recently-updated repositories go into the digest.
const REPO_LIMIT: u32 = 5;
/// Character budget for each repository's README excerpt.
const README_BUDGET: usize = 1000;
/// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = "futura-api";

#[derive(Debug, Deserialize)]
struct RepoListing {
    name: Option<String>,
    description: Option<String>,
    language: Option<String>,
}

/// Builds a text digest of `username`'s most recently updated public
/// repositories: name, primary language, description, and the head of the
/// README (tried on `main`, then `master`; other default branch names are a
/// known limitation).
///
/// Empty username means "nothing to collect" and yields an empty digest with
/// no network call. Every failure path degrades to diagnostic text.
pub async fn collect_github_digest(
    http: &Client,
    api_base: &str,
    raw_base: &str,
    username: &str,
) -> String {
    let username = username.trim();
    if username.is_empty() {
        return String::new();
    }

    let listing_url =
        format!("{api_base}/users/{username}/repos?sort=updated&per_page={REPO_LIMIT}");

    let response = match http
        .get(&listing_url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => return transport_failure_line(username, &e.to_string()),
    };

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return listing_failure_line(username, status.as_u16());
    }

    let repos: Vec<RepoListing> = match response.json().await {
        Ok(r) => r,
        Err(e) => return transport_failure_line(username, &e.to_string()),
    };

    debug!("GitHub listing for {username}: {} repos", repos.len());

    let mut digest = String::from("### GITHUB PORTFOLIO ###\n");
    for repo in &repos {
        let name = repo.name.as_deref().unwrap_or("Unknown");
        let readme = fetch_readme(http, raw_base, username, name).await;
        digest.push_str(&format_repo_entry(
            name,
            repo.language.as_deref(),
            repo.description.as_deref(),
            &readme,
        ));
    }

    digest
}

/// Fetches the head of a repository README, trying the two conventional
/// default branch names in sequence. Both failing degrades to a placeholder.
async fn fetch_readme(http: &Client, raw_base: &str, username: &str, repo: &str) -> String {
    for branch in ["main", "master"] {
        let url = format!("{raw_base}/{username}/{repo}/{branch}/README.md");
        if let Ok(response) = http.get(&url).header("User-Agent", USER_AGENT).send().await {
            if response.status() == reqwest::StatusCode::OK {
                if let Ok(body) = response.text().await {
                    return truncate_chars(&body, README_BUDGET).to_string();
                }
            }
        }
    }
    "No README found".to_string()
}

/// One digest entry per repository.
fn format_repo_entry(
    name: &str,
    language: Option<&str>,
    description: Option<&str>,
    readme: &str,
) -> String {
    format!(
        "PROJECT: {name} (Main Lang: {lang})\nDESC: {desc}\nREADME SUMMARY: {readme}\n---\n",
        lang = language.unwrap_or("Unknown"),
        desc = description.unwrap_or("No description"),
    )
}

/// Single diagnostic line for a failed listing call. The pipeline continues
/// with this line standing in for the digest; no further calls are made.
fn listing_failure_line(username: &str, status: u16) -> String {
    format!("GitHub error: user {username} not found or API limit. Status: {status}")
}

fn transport_failure_line(username: &str, error: &str) -> String {
    format!("GitHub error while analyzing {username}: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_failure_line_names_status_and_user() {
        let line = listing_failure_line("octocat", 404);
        assert!(line.contains("404"));
        assert!(line.contains("octocat"));
        assert_eq!(line.lines().count(), 1);
    }

    #[test]
    fn test_format_repo_entry_full() {
        let entry = format_repo_entry("futura", Some("Rust"), Some("Career engine"), "README head");
        assert_eq!(
            entry,
            "PROJECT: futura (Main Lang: Rust)\nDESC: Career engine\nREADME SUMMARY: README head\n---\n"
        );
    }

    #[test]
    fn test_format_repo_entry_missing_fields_use_placeholders() {
        let entry = format_repo_entry("mystery", None, None, "No README found");
        assert!(entry.contains("(Main Lang: Unknown)"));
        assert!(entry.contains("DESC: No description"));
        assert!(entry.contains("README SUMMARY: No README found"));
    }

    #[test]
    fn test_repo_listing_tolerates_null_fields() {
        let json = r#"[{"name": "futura", "description": null, "language": null}]"#;
        let repos: Vec<RepoListing> = serde_json::from_str(json).unwrap();
        assert_eq!(repos[0].name.as_deref(), Some("futura"));
        assert!(repos[0].description.is_none());
        assert!(repos[0].language.is_none());
    }

    #[tokio::test]
    async fn test_empty_username_yields_empty_digest_without_calls() {
        // The base URLs are unroutable: any network attempt would error out
        // and produce a diagnostic line instead of an empty string.
        let http = Client::new();
        let digest = collect_github_digest(&http, "http://invalid.invalid", "http://invalid.invalid", "").await;
        assert!(digest.is_empty());

        let digest = collect_github_digest(&http, "http://invalid.invalid", "http://invalid.invalid", "   ").await;
        assert!(digest.is_empty());
    }
}
