//! Text and link normalization helpers.
//!
//! This module provides the small pure functions used by the scrapers:
//! - Whitespace normalization for visible text pulled out of the DOM
//! - Order-preserving deduplication with a length cap
//! - Rewriting of relative article links to absolute URLs
//!
//! Everything here is side-effect free. Malformed input degrades to an
//! empty string and gets filtered out downstream rather than producing
//! an error.

use itertools::Itertools;

/// Origin used to absolutize root-relative and bare article links.
pub const NEWS_ORIGIN: &str = "https://news.naver.com";

/// Collapse every run of whitespace into a single space and trim the ends.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_ws("  오늘 \n 날씨  "), "오늘 날씨");
/// assert_eq!(normalize_ws("\t\n"), "");
/// ```
pub fn normalize_ws(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Yield up to `limit` distinct normalized values, in first-seen order.
///
/// Each value is passed through [`normalize_ws`]; entries that are empty
/// after normalization, or that were already produced, are skipped. The
/// returned iterator is lazy and consumes its input a single time.
///
/// # Arguments
///
/// * `values` - Raw strings, typically visible text from matched elements
/// * `limit` - Maximum number of values to yield
pub fn unique_top<I, S>(values: I, limit: usize) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| normalize_ws(value.as_ref()))
        .filter(|value| !value.is_empty())
        .unique()
        .take(limit)
}

/// Rewrite an article href to an absolute URL.
///
/// The rules apply in priority order:
/// 1. Already absolute (`http://` or `https://`) is returned unchanged
/// 2. Protocol-relative (`//host/...`) gets an `https:` scheme
/// 3. Root-relative (`/...`) is prefixed with [`NEWS_ORIGIN`]
/// 4. Anything else is prefixed with [`NEWS_ORIGIN`] plus a slash
///
/// An empty href stays empty. The function is idempotent: a value it has
/// produced passes through unchanged on a second application.
pub fn normalize_article_href(href: &str) -> String {
    if href.is_empty() {
        String::new()
    } else if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else if let Some(rest) = href.strip_prefix("//") {
        format!("https://{rest}")
    } else if href.starts_with('/') {
        format!("{NEWS_ORIGIN}{href}")
    } else {
        format!("{NEWS_ORIGIN}/{href}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  한국   경제 \t 위기\n"), "한국 경제 위기");
        assert_eq!(normalize_ws("plain"), "plain");
        assert_eq!(normalize_ws(""), "");
        assert_eq!(normalize_ws(" \t\n "), "");
    }

    #[test]
    fn test_unique_top_respects_limit() {
        let values = (0..50).map(|i| format!("kw{i}"));
        let out: Vec<String> = unique_top(values, 10).collect();
        assert_eq!(out.len(), 10);
        assert_eq!(out[0], "kw0");
        assert_eq!(out[9], "kw9");
    }

    #[test]
    fn test_unique_top_dedupes_in_first_seen_order() {
        let values = ["b", "a", " b ", "c", "a"];
        let out: Vec<String> = unique_top(values, 10).collect();
        assert_eq!(out, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_unique_top_skips_empty_after_trim() {
        let values = ["", "  ", "\t\n", "실검"];
        let out: Vec<String> = unique_top(values, 10).collect();
        assert_eq!(out, vec!["실검"]);
    }

    #[test]
    fn test_unique_top_normalizes_before_dedupe() {
        let values = ["오늘  날씨", "오늘 날씨"];
        let out: Vec<String> = unique_top(values, 10).collect();
        assert_eq!(out, vec!["오늘 날씨"]);
    }

    #[test]
    fn test_normalize_article_href_shapes() {
        assert_eq!(normalize_article_href("http://y.com"), "http://y.com");
        assert_eq!(
            normalize_article_href("https://n.news.naver.com/article/001/1"),
            "https://n.news.naver.com/article/001/1"
        );
        assert_eq!(normalize_article_href("//x.com/a"), "https://x.com/a");
        assert_eq!(
            normalize_article_href("/article/123"),
            "https://news.naver.com/article/123"
        );
        assert_eq!(
            normalize_article_href("article/123"),
            "https://news.naver.com/article/123"
        );
        assert_eq!(normalize_article_href(""), "");
    }

    #[test]
    fn test_normalize_article_href_idempotent() {
        for href in ["http://y.com", "//x.com/a", "/article/123", "article/123", ""] {
            let once = normalize_article_href(href);
            let twice = normalize_article_href(&once);
            assert_eq!(once, twice, "href {href:?} not stable after one pass");
        }
    }
}
