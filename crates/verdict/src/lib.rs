//! Turns a classifier's `(label, confidence_score)` pair into what a reader sees:
//! a display label, a color and a position on a FAKE-to-REAL bar.

pub mod label;
pub mod legend;
pub mod mapper;
pub mod schema;

pub use label::Label;
pub use legend::{legend, LegendEntry};
pub use mapper::{
    bar_position_for, color_for, display_label_for, Color, DisplayLabel, DisplayVerdict,
    HIGH_CONFIDENCE, LOW_CONFIDENCE,
};
pub use schema::ClassificationResult;
