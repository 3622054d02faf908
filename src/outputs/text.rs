//! Terminal text report.
//!
//! Renders the snapshot as two numbered TOP 10 blocks followed by a
//! warnings block when there is anything to warn about.

use crate::models::TrendSnapshot;

/// Render a snapshot as the numbered text report.
pub fn render_report(snapshot: &TrendSnapshot) -> String {
    let mut out = String::new();

    out.push_str("[실시간 검색어 TOP 10]\n");
    for (i, keyword) in snapshot.keywords.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, keyword));
    }

    out.push_str("\n[실시간 인기기사 TOP 10]\n");
    for (i, article) in snapshot.articles.iter().enumerate() {
        out.push_str(&format!("{}. {}\n   {}\n", i + 1, article.title, article.href));
    }

    if !snapshot.warnings.is_empty() {
        out.push_str("\n[주의]\n");
        for warning in &snapshot.warnings {
            out.push_str(&format!("- {warning}\n"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;

    #[test]
    fn test_report_numbers_both_lists() {
        let snapshot = TrendSnapshot {
            updated_at: "2025-05-06T08:00:00+00:00".to_string(),
            keywords: vec!["환율".to_string(), "금리".to_string()],
            articles: vec![Article {
                title: "금리 인하 전망".to_string(),
                href: "https://news.naver.com/article/001/1".to_string(),
            }],
            warnings: vec![],
        };

        let report = render_report(&snapshot);
        assert!(report.contains("[실시간 검색어 TOP 10]\n1. 환율\n2. 금리\n"));
        assert!(report.contains("[실시간 인기기사 TOP 10]\n1. 금리 인하 전망\n"));
        assert!(report.contains("   https://news.naver.com/article/001/1\n"));
        assert!(!report.contains("[주의]"));
    }

    #[test]
    fn test_report_appends_warnings_block() {
        let snapshot = TrendSnapshot {
            updated_at: "2025-05-06T08:00:00+00:00".to_string(),
            keywords: vec![],
            articles: vec![],
            warnings: vec!["실시간 검색어를 생성하지 못했습니다.".to_string()],
        };

        let report = render_report(&snapshot);
        assert!(report.contains("[주의]\n- 실시간 검색어를 생성하지 못했습니다.\n"));
    }
}
