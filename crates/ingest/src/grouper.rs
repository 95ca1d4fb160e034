use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::group::SentenceGroup;
use crate::splitter::split_sentences;

pub const DEFAULT_GROUP_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrouperConfig {
    pub group_size: usize,
}

impl Default for GrouperConfig {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
        }
    }
}

/// Partition sentences into consecutive chunks of at most `group_size`,
/// joining each chunk with a single space.
pub fn group<S: AsRef<str>>(sentences: &[S], group_size: usize) -> Result<Vec<String>> {
    ensure!(group_size >= 1, "group size must be at least 1, got {}", group_size);

    Ok(sentences
        .chunks(group_size)
        .map(|chunk| {
            chunk
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<&str>>()
                .join(" ")
        })
        .collect())
}

#[derive(Debug, Clone)]
pub struct Grouper {
    config: GrouperConfig,
}

impl Grouper {
    pub fn new(config: GrouperConfig) -> Result<Self> {
        ensure!(
            config.group_size >= 1,
            "group size must be at least 1, got {}",
            config.group_size
        );
        Ok(Self { config })
    }

    pub fn group_size(&self) -> usize {
        self.config.group_size
    }

    /// Build groups from already-segmented sentences
    pub fn group_sentences(&self, sentences: Vec<String>) -> Vec<SentenceGroup> {
        let mut groups = Vec::with_capacity(sentences.len().div_ceil(self.config.group_size));
        let mut sentences = sentences.into_iter().peekable();

        while sentences.peek().is_some() {
            let chunk: Vec<String> = sentences.by_ref().take(self.config.group_size).collect();
            groups.push(SentenceGroup::new(groups.len(), chunk));
        }

        tracing::debug!(
            groups = groups.len(),
            group_size = self.config.group_size,
            "Grouped sentences"
        );

        groups
    }

    /// Split raw text into sentences, then group them
    pub fn group_text(&self, text: &str) -> Vec<SentenceGroup> {
        self.group_sentences(split_sentences(text))
    }
}
