use std::time::Duration;

use khabar::application::ports::{EntityExtractor, NewsClassifier, TextSummarizer};
use khabar::infrastructure::models::{
    ScaffoldClassifier, ScaffoldEntityExtractor, ScaffoldSummarizer,
};

#[tokio::test]
async fn given_sports_vocabulary_when_classifying_then_sports_wins() {
    let classifier = ScaffoldClassifier::new(Duration::ZERO);

    let result = classifier
        .classify("سجل اللاعب هدفا في المباراة وفاز الفريق بالبطولة")
        .await
        .unwrap();

    assert_eq!(result.category.as_deref(), Some("رياضة"));
    let probabilities = result.probabilities.unwrap();
    assert_eq!(probabilities.len(), ScaffoldClassifier::categories().count());
    let total: f64 = probabilities.iter().map(|p| p.probability).sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert_eq!(result.confidence, Some(probabilities[0].probability));
}

#[tokio::test]
async fn given_text_without_keywords_when_classifying_then_scores_are_uniform() {
    let classifier = ScaffoldClassifier::new(Duration::ZERO);

    let result = classifier.classify("نص عادي").await.unwrap();

    let probabilities = result.probabilities.unwrap();
    assert!(
        probabilities
            .iter()
            .all(|p| (p.probability - 0.2).abs() < 1e-9)
    );
    assert_eq!(result.category.as_deref(), Some("رياضة"));
}

#[tokio::test]
async fn given_long_text_when_summarizing_then_keeps_lead_sentences() {
    let summarizer = ScaffoldSummarizer::new(2, Duration::ZERO);

    let result = summarizer
        .summarize("الجملة الأولى. الجملة الثانية! الجملة الثالثة؟ الرابعة.")
        .await
        .unwrap();

    assert_eq!(
        result.summary.as_deref(),
        Some("الجملة الأولى. الجملة الثانية.")
    );
}

#[tokio::test]
async fn given_only_punctuation_when_summarizing_then_summary_is_absent() {
    let summarizer = ScaffoldSummarizer::new(3, Duration::ZERO);

    let result = summarizer.summarize(" . ! ").await.unwrap();

    assert!(result.summary.is_none());
}

#[tokio::test]
async fn given_known_places_when_extracting_then_returns_character_spans_in_order() {
    let extractor = ScaffoldEntityExtractor::new(Duration::ZERO);
    let text = "زار الوفد دبي ثم القاهرة";

    let entities = extractor.extract(text).await.unwrap();

    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0].text.as_deref(), Some("دبي"));
    assert_eq!(entities[0].label, "LOC");
    assert_eq!(entities[0].start, Some(10));
    assert_eq!(entities[0].end, Some(13));
    assert_eq!(entities[1].text.as_deref(), Some("القاهرة"));
}

#[tokio::test]
async fn given_organisation_when_extracting_then_labels_org() {
    let extractor = ScaffoldEntityExtractor::new(Duration::ZERO);

    let entities = extractor
        .extract("أصدرت الأمم المتحدة بيانا")
        .await
        .unwrap();

    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].label, "ORG");
}

#[tokio::test]
async fn given_unknown_names_when_extracting_then_returns_empty() {
    let extractor = ScaffoldEntityExtractor::new(Duration::ZERO);

    assert!(extractor.extract("لا شيء هنا").await.unwrap().is_empty());
}
