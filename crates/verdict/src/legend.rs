use serde::Serialize;

use crate::mapper::{Color, DisplayLabel};

/// How one display label comes about and which colors it can carry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegendEntry {
    pub display_label: DisplayLabel,
    pub colors: &'static [Color],
    pub meaning: &'static str,
}

/// One entry per display label, in the order front-ends show them
pub fn legend() -> [LegendEntry; 3] {
    [
        LegendEntry {
            display_label: DisplayLabel::LikelyTrue,
            colors: &[Color::Green, Color::Gray],
            meaning: "labelled REAL; green at 85% confidence or more, gray at 50% or less",
        },
        LegendEntry {
            display_label: DisplayLabel::LikelyFake,
            colors: &[Color::Red, Color::Gray],
            meaning: "labelled FAKE; red at 85% confidence or more, gray at 50% or less",
        },
        LegendEntry {
            display_label: DisplayLabel::NeedsVerification,
            colors: &[Color::Yellow, Color::Red, Color::Gray],
            meaning: "yellow for any label above 50% and below 85% confidence; \
                      with no usable label, red at 85% or more and gray at 50% or less",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label;
    use crate::mapper::{color_for, display_label_for};

    const LABELS: [Label; 3] = [Label::Real, Label::Fake, Label::Unknown];

    fn entry_for(display_label: DisplayLabel) -> LegendEntry {
        legend()
            .into_iter()
            .find(|e| e.display_label == display_label)
            .unwrap()
    }

    #[test]
    fn test_every_verdict_is_described() {
        for label in LABELS {
            for step in 0..=200 {
                let confidence = step as f64 / 2.0;
                let shown = display_label_for(label, confidence);
                let color = color_for(confidence, label);
                let entry = entry_for(shown);

                assert!(
                    entry.colors.contains(&color),
                    "{label}@{confidence}: {shown} in {color} missing from legend"
                );
            }
        }
    }

    #[test]
    fn test_every_listed_color_occurs() {
        for entry in legend() {
            for color in entry.colors {
                let occurs = LABELS.iter().any(|&label| {
                    (0..=200).any(|step| {
                        let confidence = step as f64 / 2.0;
                        display_label_for(label, confidence) == entry.display_label
                            && color_for(confidence, label) == *color
                    })
                });
                assert!(occurs, "{} never shows in {}", entry.display_label, color);
            }
        }
    }

    #[test]
    fn test_one_entry_per_display_label() {
        let labels: Vec<DisplayLabel> = legend().iter().map(|e| e.display_label).collect();
        assert_eq!(
            labels,
            vec![
                DisplayLabel::LikelyTrue,
                DisplayLabel::LikelyFake,
                DisplayLabel::NeedsVerification
            ]
        );
    }

    #[test]
    fn test_boundary_cases_match_meaning() {
        // FAKE at low confidence is still "Likely Fake", in gray
        assert_eq!(display_label_for(Label::Fake, 30.0), DisplayLabel::LikelyFake);
        assert!(entry_for(DisplayLabel::LikelyFake).colors.contains(&color_for(30.0, Label::Fake)));

        // A confident call without a label is red but inconclusive
        assert_eq!(display_label_for(Label::Unknown, 95.0), DisplayLabel::NeedsVerification);
        assert!(entry_for(DisplayLabel::NeedsVerification)
            .colors
            .contains(&color_for(95.0, Label::Unknown)));
    }
}
