use khabar::domain::{UploadKind, UploadedFile};

fn file(name: &str, content_type: &str) -> UploadedFile {
    UploadedFile::new(name.to_string(), content_type.to_string(), 10)
}

#[test]
fn given_mime_with_parameters_when_detecting_kind_then_ignores_parameters() {
    assert_eq!(
        UploadKind::from_mime("text/plain; charset=utf-8"),
        Some(UploadKind::Text)
    );
}

#[test]
fn given_octet_stream_docx_when_checking_then_accepted_by_extension_but_not_plain_text() {
    let upload = file("report.DOCX", "application/octet-stream");

    assert!(upload.is_accepted());
    assert!(!upload.is_plain_text());
}

#[test]
fn given_image_when_checking_then_not_accepted() {
    assert!(!file("photo.png", "image/png").is_accepted());
}

#[test]
fn given_each_kind_when_round_tripping_mime_then_kind_is_preserved() {
    for kind in [UploadKind::Text, UploadKind::Docx, UploadKind::Pdf] {
        assert_eq!(UploadKind::from_mime(kind.as_mime()), Some(kind));
    }
}
