//! Fallback keyword derivation from article titles.
//!
//! When the trending page yields nothing, keywords are reconstructed from
//! the collected headlines: titles are reduced to alphanumeric and Korean
//! syllable tokens, boilerplate words are dropped, and the most frequent
//! survivors become the keyword list.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::models::Article;

/// Maximum number of derived keywords.
const KEYWORD_LIMIT: usize = 10;

/// Minimum token length in characters.
const MIN_TOKEN_CHARS: usize = 2;

/// Boilerplate headline words that carry no topical signal.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "기자", "뉴스", "오늘", "정부", "시장", "한국", "속보", "관련", "대한",
    ]
    .into_iter()
    .collect()
});

/// Everything outside ASCII alphanumerics, Korean syllables, and whitespace.
static NON_KEYWORD_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9A-Za-z가-힣\s]").unwrap());

/// Derive up to 10 keywords from article titles by token frequency.
///
/// Tokens shorter than two characters and stop words are discarded before
/// counting. The result is ordered by descending frequency; tokens with the
/// same count keep the order in which they first appeared across the titles.
/// Pure function of its input, no I/O.
pub fn derive_keywords(articles: &[Article]) -> Vec<String> {
    let mut first_seen: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for article in articles {
        let cleaned = NON_KEYWORD_CHARS.replace_all(&article.title, " ");
        for token in cleaned.split_whitespace() {
            if token.chars().count() < MIN_TOKEN_CHARS || STOP_WORDS.contains(token) {
                continue;
            }
            match counts.entry(token.to_string()) {
                Entry::Occupied(mut occupied) => *occupied.get_mut() += 1,
                Entry::Vacant(vacant) => {
                    vacant.insert(1);
                    first_seen.push(token.to_string());
                }
            }
        }
    }

    // Stable sort over first-seen order, so equal counts tie-break by
    // first encounter.
    let mut ranked = first_seen;
    ranked.sort_by_key(|token| Reverse(counts[token.as_str()]));
    ranked.truncate(KEYWORD_LIMIT);
    ranked
}
