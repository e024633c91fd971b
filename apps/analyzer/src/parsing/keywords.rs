use std::collections::HashMap;

use crate::config::KeywordLimits;
use crate::parsing::text::KEYWORD_STOP_WORDS;

const MIN_KEYWORD_CHARS: usize = 3;

/// Frequent content words, most frequent first.
///
/// The text is lower-cased and stripped of everything but ASCII letters and
/// whitespace, then tokenised on whitespace. Ties keep first-occurrence order.
pub fn extract_keywords(text: &str, limits: &KeywordLimits) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for word in cleaned.split_whitespace() {
        if word.len() < MIN_KEYWORD_CHARS || KEYWORD_STOP_WORDS.contains(word) {
            continue;
        }
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    // stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(limits.candidate_pool)
        .filter(|(_, count)| *count >= limits.min_frequency)
        .take(limits.keep)
        .map(|(word, _)| word.to_string())
        .collect()
}
