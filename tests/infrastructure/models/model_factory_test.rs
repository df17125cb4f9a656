use khabar::application::ports::{ModelLoadError, ModelLoader};
use khabar::application::services::ModelProvider;
use khabar::infrastructure::models::ModelFactory;
use khabar::presentation::ScaffoldConfig;
use khabar::presentation::config::{ModelBackend, ModelSettings};

fn http_settings() -> ModelSettings {
    ModelSettings {
        provider: ModelBackend::Http,
        classifier_url: Some("http://127.0.0.1:9000/classify".to_string()),
        summarizer_url: None,
        extractor_url: Some("   ".to_string()),
        api_key: None,
        timeout_secs: 5,
    }
}

#[test]
fn given_scaffold_mode_when_loading_then_overrides_http_backend() {
    let scaffold = ScaffoldConfig {
        enabled: true,
        mock_response_delay_ms: 0,
    };
    let factory = ModelFactory::new(http_settings(), scaffold);

    assert_eq!(factory.backend(), ModelBackend::Scaffold);
    assert!(factory.load_classifier().is_ok());
    assert!(factory.load_summarizer().is_ok());
    assert!(factory.load_extractor().is_ok());
}

#[test]
fn given_missing_endpoint_when_loading_then_reports_missing_endpoint() {
    let factory = ModelFactory::new(http_settings(), ScaffoldConfig::default());

    assert_eq!(factory.backend(), ModelBackend::Http);
    assert!(factory.load_classifier().is_ok());
    assert!(matches!(
        factory.load_summarizer(),
        Err(ModelLoadError::MissingEndpoint("summarizer"))
    ));
    assert!(matches!(
        factory.load_extractor(),
        Err(ModelLoadError::MissingEndpoint("extractor"))
    ));
}

#[test]
fn given_partially_configured_backend_when_initializing_provider_then_only_failures_are_absent() {
    let factory = ModelFactory::new(http_settings(), ScaffoldConfig::default());

    let provider = ModelProvider::initialize(&factory);

    let availability = provider.availability();
    assert!(availability.classifier);
    assert!(!availability.summarizer);
    assert!(!availability.extractor);
    assert_eq!(provider.load_failures().len(), 2);
}
