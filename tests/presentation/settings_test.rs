use khabar::presentation::Environment;
use khabar::presentation::config::{ChartBackend, ModelBackend, Settings, UploadSettings};

#[test]
fn given_no_overrides_when_loading_defaults_then_values_match_documented_defaults() {
    let settings = Settings::defaults().unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.models.provider, ModelBackend::Http);
    assert!(settings.models.classifier_url.is_none());
    assert_eq!(settings.models.timeout_secs, 30);
    assert_eq!(settings.charts.backend, ChartBackend::Svg);
    assert_eq!(settings.charts.word_cloud.width, 800);
    assert_eq!(settings.charts.word_cloud.height, 400);
    assert_eq!(settings.charts.word_cloud.max_words, 100);
    assert_eq!(settings.upload.max_bytes(), 5 * 1024 * 1024);
    assert!(!settings.logging.enable_json);
}

#[test]
fn given_environment_aliases_when_parsing_then_maps_to_environment() {
    assert_eq!("production".parse::<Environment>().unwrap(), Environment::Prod);
    assert_eq!("Development".parse::<Environment>().unwrap(), Environment::Local);
    assert_eq!(" test ".parse::<Environment>().unwrap(), Environment::Test);
    assert!("staging".parse::<Environment>().is_err());
}

#[test]
fn given_environment_when_naming_settings_file_then_uses_lowercase_name() {
    assert_eq!(Environment::Prod.settings_file(), "appsettings.prod");
    assert_eq!(Environment::default().to_string(), "local");
}

#[test]
fn given_huge_upload_limit_when_converting_to_bytes_then_saturates() {
    let upload = UploadSettings {
        max_file_size_mb: u64::MAX / 2,
    };

    assert_eq!(upload.max_bytes(), u64::MAX);
}
