use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{ModelError, TextSummarizer};
use crate::domain::SummaryResult;

const SENTENCE_TERMINATORS: [char; 4] = ['.', '!', '?', '؟'];

/// Lead-sentence summarizer: keeps the first few sentences of the text.
pub struct ScaffoldSummarizer {
    max_sentences: usize,
    delay: Duration,
}

impl ScaffoldSummarizer {
    pub fn new(max_sentences: usize, delay: Duration) -> Self {
        Self {
            max_sentences: max_sentences.max(1),
            delay,
        }
    }
}

#[async_trait]
impl TextSummarizer for ScaffoldSummarizer {
    async fn summarize(&self, text: &str) -> Result<SummaryResult, ModelError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let lead: Vec<&str> = text
            .split(SENTENCE_TERMINATORS)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .take(self.max_sentences)
            .collect();

        if lead.is_empty() {
            return Ok(SummaryResult { summary: None });
        }

        Ok(SummaryResult {
            summary: Some(format!("{}.", lead.join(". "))),
        })
    }
}
