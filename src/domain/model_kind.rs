use std::fmt;

use serde::Serialize;

/// Identifies one of the three external analysis collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Classifier,
    Summarizer,
    Extractor,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Classifier => "classifier",
            ModelKind::Summarizer => "summarizer",
            ModelKind::Extractor => "extractor",
        }
    }

    pub fn unavailable_message(&self) -> &'static str {
        match self {
            ModelKind::Classifier => "نموذج التصنيف غير متاح",
            ModelKind::Summarizer => "نموذج التلخيص غير متاح",
            ModelKind::Extractor => "نموذج استخراج الكيانات غير متاح",
        }
    }

    pub fn load_failure_message(&self, reason: &str) -> String {
        let name = match self {
            ModelKind::Classifier => "نموذج التصنيف",
            ModelKind::Summarizer => "نموذج التلخيص",
            ModelKind::Extractor => "نموذج استخراج الكيانات",
        };
        format!("فشل في تحميل {}: {}", name, reason)
    }

    pub fn invocation_failure_message(&self, reason: &str) -> String {
        let prefix = match self {
            ModelKind::Classifier => "خطأ في التصنيف",
            ModelKind::Summarizer => "خطأ في التلخيص",
            ModelKind::Extractor => "خطأ في استخراج الكيانات",
        };
        format!("{}: {}", prefix, reason)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
