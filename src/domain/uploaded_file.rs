/// Upload types the file picker offers. Only plain text is decoded today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadKind {
    Text,
    Docx,
    Pdf,
}

impl UploadKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim();
        match essence {
            "text/plain" => Some(Self::Text),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::Docx)
            }
            "application/pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    pub fn from_extension(filename: &str) -> Option<Self> {
        let extension = filename.rsplit_once('.')?.1.to_lowercase();
        match extension.as_str() {
            "txt" => Some(Self::Text),
            "docx" => Some(Self::Docx),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Docx => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            Self::Pdf => "application/pdf",
        }
    }
}

/// Metadata of a file submitted through the dashboard's file picker.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl UploadedFile {
    pub fn new(filename: String, content_type: String, size_bytes: u64) -> Self {
        Self {
            filename,
            content_type,
            size_bytes,
        }
    }

    /// Only the declared content type decides whether the bytes are decoded.
    pub fn is_plain_text(&self) -> bool {
        UploadKind::from_mime(&self.content_type) == Some(UploadKind::Text)
    }

    pub fn is_accepted(&self) -> bool {
        UploadKind::from_mime(&self.content_type).is_some()
            || UploadKind::from_extension(&self.filename).is_some()
    }
}
