use serde::Serialize;

const EASY_THRESHOLD: f64 = 15.0;
const MEDIUM_THRESHOLD: f64 = 25.0;

/// Coarse reading difficulty derived from average sentence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Readability {
    Easy,
    Medium,
    Difficult,
}

impl Readability {
    pub fn from_words_per_sentence(ratio: f64) -> Self {
        if ratio < EASY_THRESHOLD {
            Readability::Easy
        } else if ratio < MEDIUM_THRESHOLD {
            Readability::Medium
        } else {
            Readability::Difficult
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Readability::Easy => "سهل",
            Readability::Medium => "متوسط",
            Readability::Difficult => "صعب",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Readability::Easy => "green",
            Readability::Medium => "orange",
            Readability::Difficult => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextMetrics {
    pub word_count: usize,
    pub char_count: usize,
    pub sentence_count: usize,
    pub avg_words_per_sentence: f64,
    pub readability: Readability,
}

impl TextMetrics {
    /// Returns `None` for empty input: the quick-metrics panel stays blank.
    pub fn from_text(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }

        let word_count = count_words(text);
        let sentence_count = count_sentences(text);
        let avg_words_per_sentence = word_count as f64 / sentence_count.max(1) as f64;

        Some(Self {
            word_count,
            char_count: text.chars().count(),
            sentence_count,
            avg_words_per_sentence,
            readability: Readability::from_words_per_sentence(avg_words_per_sentence),
        })
    }
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Naive count of non-blank segments between literal periods.
pub fn count_sentences(text: &str) -> usize {
    text.split('.').filter(|s| !s.trim().is_empty()).count()
}
