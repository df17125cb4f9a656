use serde::Serialize;
use serde_json::Value;

use super::text_metrics::count_words;

pub const NO_SUMMARY: &str = "لم يتم إنشاء ملخص";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SummaryResult {
    pub summary: Option<String>,
}

impl SummaryResult {
    pub fn from_json(value: &Value) -> Self {
        let summary = match value {
            Value::String(s) => Some(s.clone()),
            other => other
                .get("summary")
                .and_then(Value::as_str)
                .map(str::to_string),
        };
        Self { summary }
    }

    pub fn summary_or_default(&self) -> &str {
        self.summary.as_deref().unwrap_or(NO_SUMMARY)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub original_words: usize,
    pub summary_words: usize,
    /// Percentage of words removed; 0 when the original is empty.
    pub compression_ratio: f64,
}

impl SummaryStats {
    pub fn compute(original: &str, summary: &SummaryResult) -> Self {
        let original_words = count_words(original);
        let summary_words = count_words(summary.summary.as_deref().unwrap_or(""));
        let compression_ratio = if original_words > 0 {
            (1.0 - summary_words as f64 / original_words as f64) * 100.0
        } else {
            0.0
        };

        Self {
            original_words,
            summary_words,
            compression_ratio,
        }
    }
}
