use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::domain::{InputMethod, Notice, UploadedFile};

pub const TXT_ONLY_WARNING: &str = "يتم دعم ملفات .txt فقط حاليا";
pub const UNSUPPORTED_FILE_WARNING: &str = "نوع الملف غير مدعوم. الأنواع المقبولة: txt, docx, pdf";
pub const URL_IN_DEVELOPMENT: &str = "هذه الميزة قيد التطوير";

pub struct Upload {
    pub file: UploadedFile,
    pub data: Vec<u8>,
}

/// Raw form input. Only the fields of the selected method are consulted.
pub struct InputRequest {
    pub method: InputMethod,
    pub text: String,
    pub upload: Option<Upload>,
    pub url: String,
    pub fetch_url: bool,
}

impl InputRequest {
    pub fn direct(text: impl Into<String>) -> Self {
        Self {
            method: InputMethod::Direct,
            text: text.into(),
            upload: None,
            url: String::new(),
            fetch_url: false,
        }
    }

    pub fn upload(file: UploadedFile, data: Vec<u8>) -> Self {
        Self {
            method: InputMethod::Upload,
            text: String::new(),
            upload: Some(Upload { file, data }),
            url: String::new(),
            fetch_url: false,
        }
    }

    pub fn url(url: impl Into<String>, fetch_url: bool) -> Self {
        Self {
            method: InputMethod::Url,
            text: String::new(),
            upload: None,
            url: url.into(),
            fetch_url,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedInput {
    pub text: String,
    pub notices: Vec<Notice>,
}

impl CollectedInput {
    fn text(text: String) -> Self {
        Self {
            text,
            notices: Vec::new(),
        }
    }

    fn empty_with(notice: Notice) -> Self {
        Self {
            text: String::new(),
            notices: vec![notice],
        }
    }
}

pub struct InputCollector {
    file_loader: Arc<dyn FileLoader>,
    max_upload_bytes: u64,
}

impl InputCollector {
    pub fn new(file_loader: Arc<dyn FileLoader>, max_upload_bytes: u64) -> Self {
        Self {
            file_loader,
            max_upload_bytes,
        }
    }

    pub async fn collect(&self, request: InputRequest) -> CollectedInput {
        match request.method {
            InputMethod::Direct => CollectedInput::text(request.text),
            InputMethod::Upload => match request.upload {
                Some(upload) => self.collect_upload(upload).await,
                // No new file: keep the text an earlier upload decoded.
                None => CollectedInput::text(request.text),
            },
            InputMethod::Url => collect_url(&request.url, request.fetch_url),
        }
    }

    async fn collect_upload(&self, upload: Upload) -> CollectedInput {
        let file = &upload.file;
        tracing::debug!(
            filename = %file.filename,
            content_type = %file.content_type,
            bytes = file.size_bytes,
            "Processing uploaded file"
        );

        if !file.is_accepted() {
            tracing::warn!(content_type = %file.content_type, "Rejected upload type");
            return CollectedInput::empty_with(Notice::warning(UNSUPPORTED_FILE_WARNING));
        }

        if !file.is_plain_text() {
            tracing::warn!(content_type = %file.content_type, "Upload type is not decoded yet");
            return CollectedInput::empty_with(Notice::warning(TXT_ONLY_WARNING));
        }

        if file.size_bytes > self.max_upload_bytes {
            tracing::warn!(
                bytes = file.size_bytes,
                limit = self.max_upload_bytes,
                "Upload exceeds size limit"
            );
            return CollectedInput::empty_with(Notice::error(format!(
                "حجم الملف يتجاوز الحد المسموح ({} بايت)",
                self.max_upload_bytes
            )));
        }

        match self.file_loader.extract_text(&upload.data, file).await {
            Ok(text) => {
                tracing::info!(filename = %file.filename, chars = text.chars().count(), "Upload decoded");
                CollectedInput::text(text)
            }
            Err(e) => {
                tracing::error!(filename = %file.filename, error = %e, "Failed to read upload");
                CollectedInput::empty_with(Notice::error(format!("خطأ في قراءة الملف: {}", e)))
            }
        }
    }
}

// Retrieval from URLs is not implemented; the trigger only reports that.
fn collect_url(url: &str, fetch_url: bool) -> CollectedInput {
    if url.trim().is_empty() || !fetch_url {
        return CollectedInput::default();
    }

    tracing::info!(url = %url, "URL extraction requested but not available");
    CollectedInput::empty_with(Notice::info(URL_IN_DEVELOPMENT))
}
