//! Orchestration of a single collection run.
//!
//! A run moves through a fixed sequence: launch the browser, scrape the
//! trending keywords, scrape the popular articles, release the browser,
//! then assemble the snapshot. When the browser itself cannot start, the
//! run short-circuits to a snapshot that explains the failure; scraping is
//! never attempted in that case.
//!
//! Nothing in here returns an error to the caller. Every failure mode ends
//! up as a warning inside the [`TrendSnapshot`].

use chrono::{SecondsFormat, Utc};
use tracing::{error, info, instrument};

use crate::keywords::derive_keywords;
use crate::models::{Article, TrendSnapshot};
use crate::renderer::{PageRenderer, RenderError};
use crate::scrapers::{ranking, trends};

/// Upper bound applied to both output lists.
const LIST_LIMIT: usize = 10;

const WARN_DRIVER_HINT: &str = "Chrome 설치 상태와 실행 권한을 확인하세요.";
const WARN_FALLBACK_USED: &str = "실시간 검색어 원본 수집 실패로 기사 제목 기반 키워드로 대체했습니다.";
const WARN_NO_KEYWORDS: &str = "실시간 검색어를 생성하지 못했습니다.";
const WARN_NO_ARTICLES: &str = "실시간 인기기사 수집에 실패했습니다.";

/// Run one full collection pass and assemble the snapshot.
///
/// # Arguments
///
/// * `headless` - Whether the browser runs without a visible window. Does
///   not affect extraction logic.
#[instrument(level = "info")]
pub async fn collect(headless: bool) -> TrendSnapshot {
    let renderer = match PageRenderer::new(headless) {
        Ok(renderer) => renderer,
        Err(e) => {
            error!(error = %e, "Chrome startup failed; skipping scrape entirely");
            return startup_failure_snapshot(&e);
        }
    };

    let keywords = trends::scrape_keywords(&renderer).await;
    let articles = ranking::scrape_articles(&renderer).await;
    // Browser released here, before assembly, on every path out of scraping.
    drop(renderer);

    let snapshot = assemble(keywords, articles);
    info!(
        keywords = snapshot.keywords.len(),
        articles = snapshot.articles.len(),
        warnings = snapshot.warnings.len(),
        "Snapshot assembled"
    );
    snapshot
}

/// Terminal snapshot for a browser that never started.
fn startup_failure_snapshot(error: &RenderError) -> TrendSnapshot {
    TrendSnapshot {
        updated_at: now_utc(),
        keywords: Vec::new(),
        articles: Vec::new(),
        warnings: vec![
            format!("Chrome 브라우저 실행 실패: {error}"),
            WARN_DRIVER_HINT.to_string(),
        ],
    }
}

/// Combine the raw extraction results into the final snapshot.
///
/// Empty keywords trigger the fallback deriver over the articles; whether
/// that works or not is recorded as a warning. Empty articles are recorded
/// as well. The truncation to 10 is idempotent since the extractors already
/// bound their lists.
fn assemble(keywords: Vec<String>, articles: Vec<Article>) -> TrendSnapshot {
    let mut keywords = keywords;
    let mut articles = articles;
    let mut warnings = Vec::new();

    if keywords.is_empty() {
        let derived = derive_keywords(&articles);
        if derived.is_empty() {
            warnings.push(WARN_NO_KEYWORDS.to_string());
        } else {
            keywords = derived;
            warnings.push(WARN_FALLBACK_USED.to_string());
        }
    }

    if articles.is_empty() {
        warnings.push(WARN_NO_ARTICLES.to_string());
    }

    keywords.truncate(LIST_LIMIT);
    articles.truncate(LIST_LIMIT);

    TrendSnapshot {
        updated_at: now_utc(),
        keywords,
        articles,
        warnings,
    }
}

fn now_utc() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn article(title: &str, href: &str) -> Article {
        Article {
            title: title.to_string(),
            href: href.to_string(),
        }
    }

    #[test]
    fn test_assemble_keeps_primary_keywords() {
        let snapshot = assemble(
            vec!["실검".to_string()],
            vec![article("기사 제목 하나", "https://news.naver.com/article/1")],
        );
        assert_eq!(snapshot.keywords, vec!["실검"]);
        assert!(snapshot.warnings.is_empty());
    }

    #[test]
    fn test_assemble_falls_back_to_title_keywords() {
        let snapshot = assemble(
            Vec::new(),
            vec![article(
                "경제 위기 심화 우려",
                "https://news.naver.com/article/1",
            )],
        );
        assert_eq!(snapshot.keywords, vec!["경제", "위기", "심화", "우려"]);
        assert_eq!(snapshot.warnings, vec![WARN_FALLBACK_USED.to_string()]);
    }

    #[test]
    fn test_assemble_warns_when_fallback_yields_nothing() {
        // Titles made entirely of stop words leave the deriver empty-handed.
        let snapshot = assemble(
            Vec::new(),
            vec![article("속보 한국 뉴스", "https://news.naver.com/article/1")],
        );
        assert!(snapshot.keywords.is_empty());
        assert_eq!(snapshot.warnings, vec![WARN_NO_KEYWORDS.to_string()]);
    }

    #[test]
    fn test_assemble_double_empty_carries_two_warnings() {
        let snapshot = assemble(Vec::new(), Vec::new());
        assert!(snapshot.keywords.is_empty());
        assert!(snapshot.articles.is_empty());
        assert_eq!(
            snapshot.warnings,
            vec![WARN_NO_KEYWORDS.to_string(), WARN_NO_ARTICLES.to_string()]
        );
    }

    #[test]
    fn test_assemble_truncates_to_ten() {
        let keywords = (0..12).map(|i| format!("kw{i}")).collect();
        let articles = (0..12)
            .map(|i| {
                article(
                    &format!("열두 개 중 {i}번 기사"),
                    &format!("https://news.naver.com/article/{i}"),
                )
            })
            .collect();
        let snapshot = assemble(keywords, articles);
        assert_eq!(snapshot.keywords.len(), 10);
        assert_eq!(snapshot.articles.len(), 10);
    }

    #[test]
    fn test_startup_failure_snapshot_shape() {
        let error = RenderError::Automation(anyhow!("no chrome binary"));
        let snapshot = startup_failure_snapshot(&error);
        assert!(snapshot.keywords.is_empty());
        assert!(snapshot.articles.is_empty());
        assert_eq!(snapshot.warnings.len(), 2);
        assert!(snapshot.warnings[0].contains("Chrome 브라우저 실행 실패"));
        assert!(snapshot.warnings[0].contains("no chrome binary"));
        assert_eq!(snapshot.warnings[1], WARN_DRIVER_HINT);
    }

    #[test]
    fn test_timestamp_is_utc_iso8601() {
        let stamp = now_utc();
        assert!(stamp.ends_with("+00:00"));
        assert!(stamp.contains('T'));
    }
}
