//! PDF front-end for the sectionizer.

use anyhow::Result;

use crate::document::sectionizer::sectionize;

/// Prefix of the soft-failure string returned when extraction fails.
/// Callers must treat any digest starting with this marker as a failure
/// notice, not as sectioned résumé data.
pub const EXTRACTION_ERROR_MARKER: &str = "Error reading PDF:";

/// Extracts the full text of a PDF byte stream, pages concatenated with
/// newline separators.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| anyhow::anyhow!("{e}"))
}

/// Extracts and sectionizes an uploaded PDF.
///
/// Never fails: a malformed document yields a human-readable error string
/// instead of an error, so the analysis pipeline is never blocked by a bad
/// upload.
pub fn extract_and_sectionize(bytes: &[u8]) -> String {
    match extract_pdf_text(bytes) {
        Ok(text) => sectionize(&text).render(),
        Err(e) => format!("{EXTRACTION_ERROR_MARKER} {e}"),
    }
}

/// True when a digest string is the soft-failure notice rather than data.
pub fn is_extraction_error(digest: &str) -> bool {
    digest.starts_with(EXTRACTION_ERROR_MARKER)
}
