use khabar::application::ports::{WordCloudError, WordCloudRenderer};
use khabar::infrastructure::charts::ResvgWordCloud;

#[test]
fn given_text_when_rendering_then_returns_png_data_uri() {
    let cloud = ResvgWordCloud::new(200, 100, 20, "sans-serif");

    let image = cloud.render("خبر خبر عاجل اليوم").unwrap();

    assert_eq!(image.width, 200);
    assert_eq!(image.height, 100);
    // base64 of the PNG signature "\x89PNG"
    assert!(image.data_uri.starts_with("data:image/png;base64,iVBORw0KGgo"));
}

#[test]
fn given_blank_text_when_rendering_then_reports_empty_text() {
    let cloud = ResvgWordCloud::default();

    let result = cloud.render("   ");

    assert!(matches!(result, Err(WordCloudError::EmptyText)));
}
