//! Realtime keyword scraper backed by the Google Trends trending page.
//!
//! The trending table is rendered entirely client-side, so the page gets a
//! fixed settle delay after DOM-ready before the markup is parsed. Keywords
//! live in a table body tagged with an internal `jsname` attribute, one
//! `div.mZ3RIc` cell per row.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::renderer::PageRenderer;
use crate::utils::unique_top;

/// Trending page for South Korea, restricted to the last four hours.
pub const TRENDING_URL: &str = "https://trends.google.com/trending?geo=KR&hours=4";

/// Maximum number of keywords to return.
const KEYWORD_LIMIT: usize = 10;

/// Fixed delay after DOM-ready so the client-side table can populate.
const RENDER_SETTLE: Duration = Duration::from_secs(5);

static TREND_TABLE_BODY: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tbody[jsname='cC57zf']").unwrap());
static TREND_ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static KEYWORD_CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("div.mZ3RIc").unwrap());

/// Render the trending page and extract up to 10 realtime keywords.
///
/// A render timeout or browser failure is logged and yields an empty list;
/// so does markup that no longer carries the expected table structure.
#[instrument(level = "info", skip_all)]
pub async fn scrape_keywords(renderer: &PageRenderer) -> Vec<String> {
    match renderer.render(TRENDING_URL, Some(RENDER_SETTLE)).await {
        Ok(html) => {
            let keywords = keywords_from_html(&html);
            info!(
                count = keywords.len(),
                url = TRENDING_URL,
                "Extracted trending keywords"
            );
            keywords
        }
        Err(e) => {
            warn!(error = %e, url = TRENDING_URL, "Trending page render failed");
            Vec::new()
        }
    }
}

/// Pull keyword cells out of rendered trending-page markup.
///
/// A missing table body or an empty row set is a normal outcome and simply
/// produces an empty list.
pub(crate) fn keywords_from_html(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Some(body) = document.select(&TREND_TABLE_BODY).next() else {
        return Vec::new();
    };

    let cells = body
        .select(&TREND_ROW)
        .filter_map(|row| row.select(&KEYWORD_CELL).next())
        .map(|cell| cell.text().collect::<Vec<_>>().join(" "));
    unique_top(cells, KEYWORD_LIMIT).collect()
}
