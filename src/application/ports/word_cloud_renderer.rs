use crate::domain::WordCloudImage;

pub trait WordCloudRenderer: Send + Sync {
    fn render(&self, text: &str) -> Result<WordCloudImage, WordCloudError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WordCloudError {
    #[error("no words to draw")]
    EmptyText,
    #[error("svg parsing failed: {0}")]
    Svg(String),
    #[error("rasterization failed: {0}")]
    Raster(String),
    #[error("png encoding failed: {0}")]
    Encoding(String),
}
