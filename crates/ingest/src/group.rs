use serde::{Deserialize, Serialize};

/// Consecutive sentences sent to the classifier as one paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceGroup {
    pub index: usize,
    pub sentences: Vec<String>,
    pub text: String,
}

impl SentenceGroup {
    pub fn new(index: usize, sentences: Vec<String>) -> Self {
        let text = sentences.join(" ");
        Self {
            index,
            sentences,
            text,
        }
    }

    /// Number of constituent sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
