//! Web collector — digests arbitrary pages through a text-extraction proxy.

use std::time::Duration;

use reqwest::Client;

use crate::footprint::truncate_chars;

/// Character budget per fetched page, to keep prompts bounded.
const PAGE_BUDGET: usize = 2000;
/// Per-request timeout for proxy fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds a text digest from a comma/newline-separated list of URL
/// fragments. Each URL is normalized, fetched through the text-extraction
/// proxy, and truncated; a failing URL contributes an inline diagnostic
/// line and never aborts processing of the remaining URLs.
///
/// Empty input yields an empty digest with no network calls.
pub async fn collect_web_digest(http: &Client, reader_base: &str, urls_text: &str) -> String {
    let urls = split_urls(urls_text);
    if urls.is_empty() {
        return String::new();
    }

    let mut digest = String::from("### WEB & CREATIVE PORTFOLIO ###\n");

    for url in urls {
        let url = normalize_url(&url);
        // The proxy takes the target URL embedded in its path and returns
        // cleaned page text ready for an LLM prompt.
        let proxy_url = format!("{reader_base}/{url}");

        match http.get(&proxy_url).timeout(FETCH_TIMEOUT).send().await {
            Ok(response) if response.status() == reqwest::StatusCode::OK => {
                match response.text().await {
                    Ok(body) => {
                        let clean_text = truncate_chars(&body, PAGE_BUDGET);
                        digest.push_str(&format!("SOURCE: {url}\nCONTENT:\n{clean_text}\n---\n"));
                    }
                    Err(e) => digest.push_str(&format!("SOURCE: {url} (Exception: {e})\n---\n")),
                }
            }
            Ok(response) => {
                digest.push_str(&format!(
                    "SOURCE: {url} (Error {status})\n---\n",
                    status = response.status().as_u16()
                ));
            }
            Err(e) => digest.push_str(&format!("SOURCE: {url} (Exception: {e})\n---\n")),
        }
    }

    digest
}

/// Splits user input on commas and newlines, trimming and dropping empties.
pub fn split_urls(input: &str) -> Vec<String> {
    input
        .replace('\n', ",")
        .split(',')
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect()
}

/// Prefixes the https scheme when the user omitted it. Matches the full
/// scheme prefixes: a bare hostname like `httpbin.org` still needs one.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}
