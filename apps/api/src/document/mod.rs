// Document digestion: PDF text extraction and the heuristic résumé sectionizer.
// Failure policy: extraction never blocks the pipeline — errors degrade to a
// marked error string the caller can detect (`is_extraction_error`).

pub mod pdf;
pub mod sectionizer;

pub use pdf::{extract_and_sectionize, is_extraction_error};
