use serde::{Deserialize, Serialize};
use verdict::ClassificationResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
}

/// Body POSTed to the classifier: one paragraph per sentence group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub paragraphs: Vec<Paragraph>,
}

impl AnalyzeRequest {
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        Self {
            paragraphs: texts
                .iter()
                .map(|t| Paragraph {
                    text: t.as_ref().to_string(),
                })
                .collect(),
        }
    }
}

/// Classifier reply, positionally aligned with the request paragraphs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub paragraphs: Vec<ClassificationResult>,
}
