use std::sync::Arc;

use khabar::application::services::{
    InputCollector, InputRequest, TXT_ONLY_WARNING, UNSUPPORTED_FILE_WARNING,
    URL_IN_DEVELOPMENT,
};
use khabar::domain::{NoticeLevel, UploadedFile};
use khabar::infrastructure::text_processing::PlainTextAdapter;

const LIMIT: u64 = 64;

fn collector() -> InputCollector {
    InputCollector::new(Arc::new(PlainTextAdapter), LIMIT)
}

fn upload(filename: &str, content_type: &str, data: &[u8]) -> InputRequest {
    let file = UploadedFile::new(
        filename.to_string(),
        content_type.to_string(),
        data.len() as u64,
    );
    InputRequest::upload(file, data.to_vec())
}

#[tokio::test]
async fn given_direct_text_when_collecting_then_returns_it_unchanged() {
    let collected = collector()
        .collect(InputRequest::direct("  خبر عاجل  "))
        .await;

    assert_eq!(collected.text, "  خبر عاجل  ");
    assert!(collected.notices.is_empty());
}

#[tokio::test]
async fn given_txt_upload_when_collecting_then_returns_decoded_text() {
    let collected = collector()
        .collect(upload("news.txt", "text/plain", "مرحبا".as_bytes()))
        .await;

    assert_eq!(collected.text, "مرحبا");
    assert!(collected.notices.is_empty());
}

#[tokio::test]
async fn given_pdf_upload_when_collecting_then_warns_txt_only() {
    let collected = collector()
        .collect(upload("report.pdf", "application/pdf", b"%PDF-1.4"))
        .await;

    assert!(collected.text.is_empty());
    assert_eq!(collected.notices.len(), 1);
    assert_eq!(collected.notices[0].level, NoticeLevel::Warning);
    assert_eq!(collected.notices[0].message, TXT_ONLY_WARNING);
}

#[tokio::test]
async fn given_image_upload_when_collecting_then_rejects_type() {
    let collected = collector()
        .collect(upload("photo.png", "image/png", b"\x89PNG"))
        .await;

    assert!(collected.text.is_empty());
    assert_eq!(collected.notices[0].message, UNSUPPORTED_FILE_WARNING);
}

#[tokio::test]
async fn given_oversized_upload_when_collecting_then_reports_error() {
    let data = vec![b'a'; (LIMIT + 1) as usize];

    let collected = collector()
        .collect(upload("big.txt", "text/plain", &data))
        .await;

    assert!(collected.text.is_empty());
    assert_eq!(collected.notices[0].level, NoticeLevel::Error);
}

#[tokio::test]
async fn given_invalid_utf8_upload_when_collecting_then_reports_read_error() {
    let collected = collector()
        .collect(upload("broken.txt", "text/plain", &[0xff, 0xfe, 0xfd]))
        .await;

    assert!(collected.text.is_empty());
    assert_eq!(collected.notices[0].level, NoticeLevel::Error);
    assert!(collected.notices[0].message.starts_with("خطأ في قراءة الملف"));
}

#[tokio::test]
async fn given_upload_method_without_file_when_collecting_then_returns_empty() {
    let mut request = InputRequest::direct("");
    request.method = khabar::domain::InputMethod::Upload;

    let collected = collector().collect(request).await;

    assert!(collected.text.is_empty());
    assert!(collected.notices.is_empty());
}

#[tokio::test]
async fn given_upload_method_with_carried_text_when_collecting_then_keeps_it() {
    let mut request = InputRequest::direct("نص من ملف سابق");
    request.method = khabar::domain::InputMethod::Upload;

    let collected = collector().collect(request).await;

    assert_eq!(collected.text, "نص من ملف سابق");
    assert!(collected.notices.is_empty());
}

#[tokio::test]
async fn given_url_with_trigger_when_collecting_then_reports_in_development() {
    let collected = collector()
        .collect(InputRequest::url("https://example.com/news/1", true))
        .await;

    assert!(collected.text.is_empty());
    assert_eq!(collected.notices.len(), 1);
    assert_eq!(collected.notices[0].level, NoticeLevel::Info);
    assert_eq!(collected.notices[0].message, URL_IN_DEVELOPMENT);
}

#[tokio::test]
async fn given_url_without_trigger_when_collecting_then_stays_silent() {
    let collected = collector()
        .collect(InputRequest::url("https://example.com/news/1", false))
        .await;

    assert!(collected.text.is_empty());
    assert!(collected.notices.is_empty());
}

#[tokio::test]
async fn given_blank_url_with_trigger_when_collecting_then_stays_silent() {
    let collected = collector().collect(InputRequest::url("   ", true)).await;

    assert!(collected.notices.is_empty());
}
