use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use super::classification::UNSPECIFIED_CATEGORY;

pub const ENTITY_CHART_TITLE: &str = "توزيع أنواع الكيانات";

/// One extracted entity. Only `label` is expected from every extractor; the
/// span fields depend on the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub text: Option<String>,
    pub label: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub score: Option<f64>,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            label: label.into(),
            start: None,
            end: None,
            score: None,
        }
    }

    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Accepts the common record shapes: `text`, `entity` or `word` for the
    /// surface form and `label` or `entity_group` for the type.
    pub fn from_json(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        let text = ["text", "entity", "word"]
            .iter()
            .find_map(|key| record.get(*key).and_then(Value::as_str))
            .map(str::to_string);
        let label = ["label", "entity_group", "type"]
            .iter()
            .find_map(|key| record.get(*key).and_then(Value::as_str))
            .unwrap_or(UNSPECIFIED_CATEGORY)
            .to_string();
        let as_index = |key: &str| {
            record
                .get(key)
                .and_then(Value::as_u64)
                .and_then(|v| usize::try_from(v).ok())
        };

        Some(Self {
            text,
            label,
            start: as_index("start"),
            end: as_index("end"),
            score: record.get("score").and_then(Value::as_f64),
        })
    }
}

/// Per-label frequencies, most frequent first, ties ordered by label.
pub fn label_counts(entities: &[Entity]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entity in entities {
        *counts.entry(entity.label.as_str()).or_insert(0) += 1;
    }

    let mut sorted: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}
