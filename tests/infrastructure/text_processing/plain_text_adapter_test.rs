use khabar::application::ports::{FileLoader, FileLoaderError};
use khabar::domain::UploadedFile;
use khabar::infrastructure::text_processing::PlainTextAdapter;

fn text_file(content_type: &str, size: usize) -> UploadedFile {
    UploadedFile::new("news.txt".to_string(), content_type.to_string(), size as u64)
}

#[tokio::test]
async fn given_valid_utf8_bytes_when_extracting_then_returns_string() {
    let data = "مرحبا بالعالم".as_bytes();

    let result = PlainTextAdapter
        .extract_text(data, &text_file("text/plain", data.len()))
        .await;

    assert_eq!(result.unwrap(), "مرحبا بالعالم");
}

#[tokio::test]
async fn given_byte_order_mark_when_extracting_then_strips_it() {
    let mut data = vec![0xEF, 0xBB, 0xBF];
    data.extend_from_slice("خبر".as_bytes());

    let result = PlainTextAdapter
        .extract_text(&data, &text_file("text/plain; charset=utf-8", data.len()))
        .await;

    assert_eq!(result.unwrap(), "خبر");
}

#[tokio::test]
async fn given_invalid_utf8_when_extracting_then_returns_extraction_failed() {
    let data = [0xff, 0xfe];

    let result = PlainTextAdapter
        .extract_text(&data, &text_file("text/plain", data.len()))
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_non_text_content_type_when_extracting_then_returns_unsupported() {
    let result = PlainTextAdapter
        .extract_text(b"%PDF", &text_file("application/pdf", 4))
        .await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
