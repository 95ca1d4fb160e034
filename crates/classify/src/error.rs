use thiserror::Error;

/// Ways an analysis run can end without a report
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The snippet has no non-whitespace text; nothing was sent
    #[error("Please enter some text to analyze.")]
    EmptyInput,

    /// Timeout, DNS failure, refused connection and similar transport problems
    #[error("could not contact analysis service: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// The classifier answered with a non-success status
    #[error("analysis service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The classifier answered 2xx but the body is not the expected document
    #[error("analysis service sent an unreadable response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl AnalysisError {
    /// Input problems are warnings for the user, not service failures
    pub fn is_user_warning(&self) -> bool {
        matches!(self, AnalysisError::EmptyInput)
    }
}
