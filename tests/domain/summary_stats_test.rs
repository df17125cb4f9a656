use khabar::domain::{NO_SUMMARY, SummaryResult, SummaryStats};
use serde_json::json;

#[test]
fn given_empty_original_when_computing_stats_then_ratio_is_zero() {
    let summary = SummaryResult {
        summary: Some("ملخص".to_string()),
    };

    let stats = SummaryStats::compute("", &summary);

    assert_eq!(stats.original_words, 0);
    assert_eq!(stats.compression_ratio, 0.0);
    assert!(!stats.compression_ratio.is_nan());
}

#[test]
fn given_half_length_summary_when_computing_stats_then_ratio_is_fifty_percent() {
    let summary = SummaryResult {
        summary: Some("a b".to_string()),
    };

    let stats = SummaryStats::compute("a b c d", &summary);

    assert_eq!(stats.original_words, 4);
    assert_eq!(stats.summary_words, 2);
    assert!((stats.compression_ratio - 50.0).abs() < 1e-9);
}

#[test]
fn given_missing_summary_when_computing_stats_then_counts_zero_words() {
    let stats = SummaryStats::compute("a b c d", &SummaryResult { summary: None });

    assert_eq!(stats.summary_words, 0);
    assert!((stats.compression_ratio - 100.0).abs() < 1e-9);
}

#[test]
fn given_payload_without_summary_when_parsing_then_default_text_is_shown() {
    let result = SummaryResult::from_json(&json!({"length": 3}));

    assert_eq!(result.summary_or_default(), NO_SUMMARY);
}

#[test]
fn given_bare_string_payload_when_parsing_then_it_is_the_summary() {
    let result = SummaryResult::from_json(&json!("نص مختصر"));

    assert_eq!(result.summary.as_deref(), Some("نص مختصر"));
}
