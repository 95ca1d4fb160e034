pub mod client;
pub mod error;
pub mod pipeline;
pub mod schema;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use client::{AnalysisClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use error::AnalysisError;
pub use pipeline::{AnalysisReport, Analyzer, GroupVerdict};
pub use schema::{AnalyzeRequest, AnalyzeResponse, Paragraph};
