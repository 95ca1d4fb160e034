use anyhow::{Context, Result};
use std::time::Duration;
use verdict::ClassificationResult;

use crate::error::AnalysisError;
use crate::schema::{AnalyzeRequest, AnalyzeResponse};

pub const DEFAULT_ENDPOINT: &str = "https://fnd-service.onrender.com/analyze";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct AnalysisClient {
    endpoint: String,
    client: reqwest::Client,
}

impl AnalysisClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Classify every text in one request. Results come back in request order.
    /// Failures are returned as-is; nothing is retried.
    pub async fn analyze<S: AsRef<str>>(
        &self,
        texts: &[S],
    ) -> Result<Vec<ClassificationResult>, AnalysisError> {
        let request = AnalyzeRequest::from_texts(texts);

        tracing::debug!(
            endpoint = %self.endpoint,
            paragraphs = request.paragraphs.len(),
            "Sending analysis request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(endpoint = %self.endpoint, error = %e, "Analysis service unreachable");
                AnalysisError::Unreachable(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(AnalysisError::Unreachable)?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Analysis request failed");
            return Err(AnalysisError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: AnalyzeResponse = serde_json::from_str(&body).map_err(AnalysisError::Decode)?;

        Ok(parsed.paragraphs)
    }
}
