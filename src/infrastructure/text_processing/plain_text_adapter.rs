use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{UploadKind, UploadedFile};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decodes `text/plain` uploads as UTF-8. Editors on Windows commonly save
/// Arabic text with a byte-order mark, which is dropped.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        file: &UploadedFile,
    ) -> Result<String, FileLoaderError> {
        if UploadKind::from_mime(&file.content_type) != Some(UploadKind::Text) {
            return Err(FileLoaderError::UnsupportedContentType(
                file.content_type.clone(),
            ));
        }

        let bytes = data.strip_prefix(UTF8_BOM).unwrap_or(data);

        String::from_utf8(bytes.to_vec())
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))
    }
}
