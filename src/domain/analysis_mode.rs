use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four mutually exclusive analyses a user can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    #[default]
    Classification,
    Summarization,
    Entities,
    Comprehensive,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 4] = [
        AnalysisMode::Classification,
        AnalysisMode::Summarization,
        AnalysisMode::Entities,
        AnalysisMode::Comprehensive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Classification => "classification",
            AnalysisMode::Summarization => "summarization",
            AnalysisMode::Entities => "entities",
            AnalysisMode::Comprehensive => "comprehensive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMode::Classification => "تصنيف النصوص",
            AnalysisMode::Summarization => "تلخيص النصوص",
            AnalysisMode::Entities => "استخراج الكيانات",
            AnalysisMode::Comprehensive => "تحليل شامل",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            AnalysisMode::Classification => "🏷️ نتائج التصنيف",
            AnalysisMode::Summarization => "📄 ملخص النص",
            AnalysisMode::Entities => "🔍 الكيانات المستخرجة",
            AnalysisMode::Comprehensive => "🔍 التحليل الشامل",
        }
    }
}

impl FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classification" => Ok(AnalysisMode::Classification),
            "summarization" => Ok(AnalysisMode::Summarization),
            "entities" => Ok(AnalysisMode::Entities),
            "comprehensive" => Ok(AnalysisMode::Comprehensive),
            other => Err(format!("Invalid analysis mode: {}", other)),
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
