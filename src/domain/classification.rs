use serde::Serialize;
use serde_json::Value;

use super::chart::{ChartPoint, ChartSeries};

pub const UNSPECIFIED_CATEGORY: &str = "غير محدد";
pub const PROBABILITY_CHART_TITLE: &str = "توزيع الاحتمالات";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: String,
    pub probability: f64,
}

/// Classifier output. Every field is optional; consumers fall back per field.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ClassificationResult {
    pub category: Option<String>,
    pub confidence: Option<f64>,
    pub probabilities: Option<Vec<CategoryScore>>,
}

impl ClassificationResult {
    /// Reads the loosely-typed collaborator payload. Unknown or mistyped
    /// fields are treated as absent.
    pub fn from_json(value: &Value) -> Self {
        let category = value.get("category").and_then(value_as_label);
        let confidence = value.get("confidence").and_then(Value::as_f64);
        let probabilities = value
            .get("probabilities")
            .and_then(Value::as_object)
            .map(|map| {
                let mut scores: Vec<CategoryScore> = map
                    .iter()
                    .filter_map(|(category, p)| {
                        p.as_f64().map(|probability| CategoryScore {
                            category: category.clone(),
                            probability,
                        })
                    })
                    .collect();
                scores.sort_by(|a, b| b.probability.total_cmp(&a.probability));
                scores
            });

        Self {
            category,
            confidence,
            probabilities,
        }
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(UNSPECIFIED_CATEGORY)
    }

    /// Confidence clamped into `[0, 1]` for progress-bar rendering.
    pub fn clamped_confidence(&self) -> Option<f64> {
        self.confidence
            .filter(|c| c.is_finite())
            .map(|c| c.clamp(0.0, 1.0))
    }

    pub fn probability_series(&self) -> Option<ChartSeries> {
        self.probabilities.as_ref().map(|scores| {
            let points = scores
                .iter()
                .map(|s| ChartPoint {
                    label: s.category.clone(),
                    value: s.probability,
                })
                .collect();
            ChartSeries::new(PROBABILITY_CHART_TITLE, points)
        })
    }
}

fn value_as_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
