use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

pub const WORD_CLOUD_TITLE: &str = "سحابة الكلمات";

/// A rendered word cloud, held as a PNG data URI ready for an `<img>` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCloudImage {
    pub width: u32,
    pub height: u32,
    pub data_uri: String,
}

impl WordCloudImage {
    pub fn from_png(width: u32, height: u32, png: &[u8]) -> Self {
        Self {
            width,
            height,
            data_uri: format!("data:image/png;base64,{}", STANDARD.encode(png)),
        }
    }
}
