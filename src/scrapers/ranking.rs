//! Popular-article scraper for the NAVER ranking pages.
//!
//! The ranking markup differs between sections, so a fixed ordered list of
//! selector patterns is applied to each rendered page, most specific first.
//! Candidate URLs are tried strictly in order: the first URL whose combined
//! selectors produce 10 distinct articles wins outright, a URL that ends
//! below 10 is discarded, and results are never merged across URLs.

use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

use crate::models::Article;
use crate::renderer::PageRenderer;
use crate::utils::{normalize_article_href, normalize_ws};

/// Maximum number of articles to return.
const MAX_ARTICLES: usize = 10;

/// Minimum visible title length after whitespace collapse.
const MIN_TITLE_CHARS: usize = 4;

/// Path fragment every accepted article link must carry.
const ARTICLE_PATH_MARKER: &str = "/article/";

/// Candidate ranking pages, tried in order.
const RANKING_URLS: [&str; 2] = [
    "https://news.naver.com/main/ranking/popularDay.naver",
    "https://news.naver.com/main/ranking/popularDay.naver?mid=etc&sid1=111",
];

/// Selector patterns applied to each rendered page, most specific first.
const ARTICLE_SELECTORS: [&str; 5] = [
    ".rankingnews_list .list_title",
    ".rankingnews_list a[href*='/article/']",
    ".rankingnews_box a[href*='/article/']",
    ".rankingnews_list li a",
    ".rankingnews_box li a",
];

/// Render the ranking pages and collect up to 10 popular articles.
///
/// A URL that fails to render is skipped. A URL that renders but yields
/// fewer than 10 distinct articles is discarded before the next candidate
/// is tried; when no candidate fills the list the result is empty.
#[instrument(level = "info", skip_all)]
pub async fn scrape_articles(renderer: &PageRenderer) -> Vec<Article> {
    for url in RANKING_URLS {
        let html = match renderer.render(url, None).await {
            Ok(html) => html,
            Err(e) => {
                warn!(error = %e, %url, "Ranking page render failed; trying next candidate");
                continue;
            }
        };

        let articles = articles_from_html(&html, &ARTICLE_SELECTORS);
        if articles.len() >= MAX_ARTICLES {
            info!(count = articles.len(), %url, "Collected popular articles");
            return articles;
        }
        debug!(
            count = articles.len(),
            %url,
            "Ranking page yielded a partial list; trying next candidate"
        );
    }

    warn!("No ranking page produced a full article list");
    Vec::new()
}

/// Apply the selector patterns to rendered markup and dedupe the hits.
///
/// Matched elements contribute their visible text (joined with single
/// spaces, then collapsed) as the title and their normalized href as the
/// link. Entries with short titles or links lacking the article marker are
/// dropped. Deduplication is by the (title, href) pair in first-seen order,
/// and collection stops the moment the list reaches 10 entries.
pub(crate) fn articles_from_html(html: &str, selectors: &[&str]) -> Vec<Article> {
    let document = Html::parse_document(html);
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut articles = Vec::new();

    for pattern in selectors {
        let selector = Selector::parse(pattern).unwrap();
        for element in document.select(&selector) {
            let title = normalize_ws(&element.text().collect::<Vec<_>>().join(" "));
            let href = normalize_article_href(element.value().attr("href").unwrap_or_default());
            if title.chars().count() < MIN_TITLE_CHARS || !href.contains(ARTICLE_PATH_MARKER) {
                continue;
            }
            if !seen.insert((title.clone(), href.clone())) {
                continue;
            }
            articles.push(Article { title, href });
            if articles.len() >= MAX_ARTICLES {
                return articles;
            }
        }
    }

    articles
}
