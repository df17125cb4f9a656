use std::collections::HashMap;

pub const TOP_WORDS_LIMIT: usize = 10;
pub const TOP_WORDS_TITLE: &str = "أكثر الكلمات تكراراً";

/// The `limit` most frequent whitespace-delimited tokens. Ties keep the
/// order in which the tokens first appear.
pub fn word_frequencies(text: &str, limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, word) in text.split_whitespace().enumerate() {
        counts.entry(word).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first_seen))| (word, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(word, count, _)| (word.to_string(), count))
        .collect()
}
