// src/error.rs
use thiserror::Error;

/// Everything the analysis pipeline can fail with. Stage errors are caught
/// at the handler boundary and converted to JSON error responses there.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("{0}")]
    Validation(String),

    #[error("PDF processing failed: {0}")]
    Extraction(String),

    #[error("completion service call failed: {0}")]
    Completion(String),

    #[error("could not parse model output: {0}")]
    Parse(String),
}

impl AnalyzeError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AnalyzeError::Validation(_) | AnalyzeError::Extraction(_)
        )
    }
}
