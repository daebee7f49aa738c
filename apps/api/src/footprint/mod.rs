// Digital-footprint collection: GitHub portfolio digest, web-page digest,
// and the portfolio-link reachability gate.
//
// Failure policy (shared by both collectors): every upstream failure
// degrades to diagnostic text inside the digest. Collectors never return
// errors and never abort the pipeline.

pub mod github;
pub mod link_check;
pub mod web;

pub use github::collect_github_digest;
pub use link_check::{validate_optional_link, LinkVerdict};
pub use web::collect_web_digest;

/// Truncates a string to at most `max_chars` characters, on a char boundary.
/// Byte slicing would panic mid-codepoint on non-ASCII pages.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_shorter_than_budget() {
        assert_eq!(truncate_chars("short", 1000), "short");
    }

    #[test]
    fn test_truncate_chars_cuts_at_budget() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
    }

    #[test]
    fn test_truncate_chars_multibyte_safe() {
        // è is two bytes in UTF-8; the cut must not split it
        assert_eq!(truncate_chars("caffè latte", 5), "caffè");
    }
}
