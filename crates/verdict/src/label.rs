use serde::{Deserialize, Serialize};
use std::fmt;

/// The classifier's categorical verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Real,
    Fake,
    Unknown,
}

impl Label {
    /// Parse the label as the classifier sends it. Matching is exact;
    /// anything other than `REAL` or `FAKE`, including no label, is `Unknown`.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            Some("REAL") => Label::Real,
            Some("FAKE") => Label::Fake,
            _ => Label::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Real => "REAL",
            Label::Fake => "FAKE",
            Label::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire() {
        assert_eq!(Label::from_wire(Some("REAL")), Label::Real);
        assert_eq!(Label::from_wire(Some("FAKE")), Label::Fake);
        assert_eq!(Label::from_wire(Some("real")), Label::Unknown);
        assert_eq!(Label::from_wire(Some("")), Label::Unknown);
        assert_eq!(Label::from_wire(None), Label::Unknown);
    }

    #[test]
    fn test_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Label::Fake).unwrap(), "\"FAKE\"");
        assert_eq!(Label::Unknown.to_string(), "UNKNOWN");
    }
}
