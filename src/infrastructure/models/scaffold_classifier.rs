use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{ModelError, NewsClassifier};
use crate::domain::{CategoryScore, ClassificationResult};

const LEXICON: &[(&str, &[&str])] = &[
    (
        "رياضة",
        &["مباراة", "فريق", "هدف", "بطولة", "لاعب", "الدوري", "كأس", "ملعب"],
    ),
    (
        "سياسة",
        &["حكومة", "وزير", "انتخابات", "رئيس", "برلمان", "سياسي", "مجلس", "اتفاق"],
    ),
    (
        "اقتصاد",
        &["سوق", "أسعار", "بنك", "اقتصاد", "استثمار", "نفط", "تضخم", "شركة"],
    ),
    (
        "تكنولوجيا",
        &["تقنية", "هاتف", "إنترنت", "ذكاء", "برمجيات", "تطبيق", "رقمي", "حاسوب"],
    ),
    (
        "صحة",
        &["مستشفى", "طبيب", "مرض", "علاج", "لقاح", "صحة", "وباء", "دواء"],
    ),
];

/// Keyword-count classifier for running the dashboard without a model
/// backend. Scores are add-one smoothed keyword hits, normalised.
pub struct ScaffoldClassifier {
    delay: Duration,
}

impl ScaffoldClassifier {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn categories() -> impl Iterator<Item = &'static str> {
        LEXICON.iter().map(|(category, _)| *category)
    }
}

#[async_trait]
impl NewsClassifier for ScaffoldClassifier {
    async fn classify(&self, text: &str) -> Result<ClassificationResult, ModelError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let tokens: Vec<&str> = text
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|t| !t.is_empty())
            .collect();

        let scores: Vec<(&str, f64)> = LEXICON
            .iter()
            .map(|(category, keywords)| {
                let hits = tokens
                    .iter()
                    .filter(|token| keywords.iter().any(|k| token.contains(k)))
                    .count();
                (*category, hits as f64 + 1.0)
            })
            .collect();
        let total: f64 = scores.iter().map(|(_, s)| s).sum();

        let mut probabilities: Vec<CategoryScore> = scores
            .into_iter()
            .map(|(category, score)| CategoryScore {
                category: category.to_string(),
                probability: score / total,
            })
            .collect();
        // Stable sort keeps lexicon order among equal scores.
        probabilities.sort_by(|a, b| b.probability.total_cmp(&a.probability));

        let best = probabilities
            .first()
            .ok_or_else(|| ModelError::InferenceFailed("empty category lexicon".to_string()))?;

        Ok(ClassificationResult {
            category: Some(best.category.clone()),
            confidence: Some(best.probability),
            probabilities: Some(probabilities.clone()),
        })
    }
}
