use khabar::domain::{Readability, TextMetrics};

#[test]
fn given_empty_text_when_computing_metrics_then_panel_is_empty() {
    assert!(TextMetrics::from_text("").is_none());
}

#[test]
fn given_three_words_one_sentence_when_computing_metrics_then_readability_is_easy() {
    let metrics = TextMetrics::from_text("word word word.").unwrap();

    assert_eq!(metrics.word_count, 3);
    assert_eq!(metrics.sentence_count, 1);
    assert_eq!(metrics.char_count, 15);
    assert!((metrics.avg_words_per_sentence - 3.0).abs() < f64::EPSILON);
    assert_eq!(metrics.readability, Readability::Easy);
}

#[test]
fn given_no_sentences_when_computing_metrics_then_divides_by_one() {
    let metrics = TextMetrics::from_text(" . . ").unwrap();

    assert_eq!(metrics.sentence_count, 0);
    assert_eq!(metrics.word_count, 2);
    assert!((metrics.avg_words_per_sentence - 2.0).abs() < f64::EPSILON);
    assert!(metrics.avg_words_per_sentence.is_finite());
}

#[test]
fn given_arabic_text_when_counting_characters_then_counts_code_points() {
    let metrics = TextMetrics::from_text("مرحبا").unwrap();

    assert_eq!(metrics.char_count, 5);
    assert_eq!(metrics.word_count, 1);
}

#[test]
fn given_twenty_words_per_sentence_when_computing_metrics_then_readability_is_medium() {
    let sentence = vec!["كلمة"; 20].join(" ");
    let text = format!("{}. {}.", sentence, sentence);

    let metrics = TextMetrics::from_text(&text).unwrap();

    assert_eq!(metrics.sentence_count, 2);
    assert_eq!(metrics.readability, Readability::Medium);
    assert_eq!(metrics.readability.color(), "orange");
}

#[test]
fn given_long_unpunctuated_text_when_computing_metrics_then_readability_is_difficult() {
    let text = vec!["خبر"; 30].join(" ");

    let metrics = TextMetrics::from_text(&text).unwrap();

    assert_eq!(metrics.sentence_count, 1);
    assert_eq!(metrics.readability, Readability::Difficult);
    assert_eq!(metrics.readability.label(), "صعب");
    assert_eq!(metrics.readability.color(), "red");
}
