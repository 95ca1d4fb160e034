use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::label::Label;
use crate::mapper::clamp_confidence;

/// One entry of the classifier's `paragraphs` array.
///
/// Both fields are optional on the wire. A field that is missing, null or of
/// the wrong type deserializes to `None` instead of failing the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(default, deserialize_with = "lenient_string")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub confidence_score: Option<f64>,
}

impl ClassificationResult {
    pub fn new(label: impl Into<String>, confidence_score: f64) -> Self {
        Self {
            label: Some(label.into()),
            confidence_score: Some(confidence_score),
        }
    }

    pub fn label(&self) -> Label {
        Label::from_wire(self.label.as_deref())
    }

    /// Confidence in [0, 100]; absent counts as 0
    pub fn confidence(&self) -> f64 {
        clamp_confidence(self.confidence_score.unwrap_or(0.0))
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        // Some services send numbers as strings
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}
