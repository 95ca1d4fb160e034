use serde::{Deserialize, Serialize};
use std::fmt;

use crate::label::Label;
use crate::schema::ClassificationResult;

/// At or above this confidence a definite label is shown as settled
pub const HIGH_CONFIDENCE: f64 = 85.0;
/// At or below this confidence a result carries no color signal
pub const LOW_CONFIDENCE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Red,
    Yellow,
    Gray,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Gray => "gray",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayLabel {
    #[serde(rename = "Likely True")]
    LikelyTrue,
    #[serde(rename = "Likely Fake")]
    LikelyFake,
    #[serde(rename = "Needs Verification")]
    NeedsVerification,
}

impl DisplayLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayLabel::LikelyTrue => "Likely True",
            DisplayLabel::LikelyFake => "Likely Fake",
            DisplayLabel::NeedsVerification => "Needs Verification",
        }
    }
}

impl fmt::Display for DisplayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color for a result. High confidence is only reassuring when the label is REAL;
/// a confident FAKE (or unknown) call is red.
pub fn color_for(confidence: f64, label: Label) -> Color {
    if confidence >= HIGH_CONFIDENCE {
        if label == Label::Real {
            Color::Green
        } else {
            Color::Red
        }
    } else if confidence > LOW_CONFIDENCE {
        Color::Yellow
    } else {
        Color::Gray
    }
}

/// Human-facing label. Confidence strictly inside (50, 85) is inconclusive
/// whatever the label; exactly 50 or 85 fall through to the label.
pub fn display_label_for(label: Label, confidence: f64) -> DisplayLabel {
    if confidence > LOW_CONFIDENCE && confidence < HIGH_CONFIDENCE {
        return DisplayLabel::NeedsVerification;
    }
    match label {
        Label::Real => DisplayLabel::LikelyTrue,
        Label::Fake => DisplayLabel::LikelyFake,
        Label::Unknown => DisplayLabel::NeedsVerification,
    }
}

/// Position on a 0..=100 bar where 0 is FAKE, 100 is REAL and 50 is undecided.
pub fn bar_position_for(confidence: f64, label: Label) -> f64 {
    match label {
        Label::Fake => confidence / 2.0,
        Label::Real => confidence / 2.0 + 50.0,
        Label::Unknown => 50.0,
    }
}

/// Everything a front-end needs to render one classification result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayVerdict {
    pub label: Label,
    /// Confidence as the classifier sent it; absent counts as 0
    pub reported_confidence: f64,
    /// `reported_confidence` clamped into [0, 100], the value every projection uses
    pub confidence: f64,
    pub display_label: DisplayLabel,
    pub color: Color,
    pub bar_position: f64,
}

impl DisplayVerdict {
    /// `confidence` is clamped into [0, 100]; NaN counts as 0.
    pub fn new(label: Label, reported_confidence: f64) -> Self {
        let confidence = clamp_confidence(reported_confidence);
        Self {
            label,
            reported_confidence,
            confidence,
            display_label: display_label_for(label, confidence),
            color: color_for(confidence, label),
            bar_position: bar_position_for(confidence, label),
        }
    }

    pub fn from_result(result: &ClassificationResult) -> Self {
        Self::new(result.label(), result.confidence_score.unwrap_or(0.0))
    }

    /// True when the reported confidence had to be clamped to be mapped
    pub fn is_out_of_range(&self) -> bool {
        self.reported_confidence != self.confidence
    }

    /// `Confidence: 92.0%`, or `Confidence: 140.0% (out of range, mapped as 100.0%)`
    pub fn confidence_text(&self) -> String {
        if self.is_out_of_range() {
            format!(
                "Confidence: {:.1}% (out of range, mapped as {:.1}%)",
                self.reported_confidence, self.confidence
            )
        } else {
            format!("Confidence: {:.1}%", self.confidence)
        }
    }
}

pub(crate) fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 100.0)
    }
}
