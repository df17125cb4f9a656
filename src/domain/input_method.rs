use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where the input text comes from. Exactly one source is active per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMethod {
    #[default]
    Direct,
    Upload,
    Url,
}

impl InputMethod {
    pub const ALL: [InputMethod; 3] = [InputMethod::Direct, InputMethod::Upload, InputMethod::Url];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputMethod::Direct => "direct",
            InputMethod::Upload => "upload",
            InputMethod::Url => "url",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputMethod::Direct => "كتابة مباشرة",
            InputMethod::Upload => "رفع ملف نصي",
            InputMethod::Url => "URL",
        }
    }
}

impl FromStr for InputMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(InputMethod::Direct),
            "upload" => Ok(InputMethod::Upload),
            "url" => Ok(InputMethod::Url),
            other => Err(format!("Invalid input method: {}", other)),
        }
    }
}

impl fmt::Display for InputMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
