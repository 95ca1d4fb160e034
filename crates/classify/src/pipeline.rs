use anyhow::Result;
use ingest::{is_blank, split_sentences, Grouper, GrouperConfig};
use serde::{Deserialize, Serialize};
use verdict::{ClassificationResult, DisplayVerdict};

use crate::client::AnalysisClient;
use crate::error::AnalysisError;

/// A classified sentence group, ready to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupVerdict {
    pub index: usize,
    pub text: String,
    pub sentence_count: usize,
    pub verdict: DisplayVerdict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub sentence_count: usize,
    pub group_size: usize,
    pub groups: Vec<GroupVerdict>,
}

/// One analysis run: validate, split, group, classify, map
pub struct Analyzer {
    client: AnalysisClient,
    grouper: Grouper,
}

impl Analyzer {
    pub fn new(client: AnalysisClient, config: GrouperConfig) -> Result<Self> {
        Ok(Self {
            client,
            grouper: Grouper::new(config)?,
        })
    }

    pub fn group_size(&self) -> usize {
        self.grouper.group_size()
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    pub async fn analyze(&self, text: &str) -> Result<AnalysisReport, AnalysisError> {
        if is_blank(text) {
            return Err(AnalysisError::EmptyInput);
        }

        let sentences = split_sentences(text);
        let sentence_count = sentences.len();
        let groups = self.grouper.group_sentences(sentences);
        let texts: Vec<&str> = groups.iter().map(|g| g.text.as_str()).collect();

        tracing::info!(
            sentences = sentence_count,
            groups = groups.len(),
            "Analyzing snippet"
        );

        let results = self.client.analyze(&texts).await?;

        if results.len() != groups.len() {
            tracing::warn!(
                expected = groups.len(),
                received = results.len(),
                "Classifier result count does not match group count"
            );
        }

        let missing = ClassificationResult::default();
        let groups = groups
            .into_iter()
            .enumerate()
            .map(|(i, group)| {
                let result = results.get(i).unwrap_or(&missing);
                GroupVerdict {
                    index: group.index,
                    sentence_count: group.len(),
                    verdict: DisplayVerdict::from_result(result),
                    text: group.text,
                }
            })
            .collect();

        Ok(AnalysisReport {
            sentence_count,
            group_size: self.grouper.group_size(),
            groups,
        })
    }
}
