//! Data models for the collected snapshot.
//!
//! This module defines the two structures that cross the output boundary:
//! - [`Article`]: a single ranked headline with its absolute link
//! - [`TrendSnapshot`]: the full result of one collection run
//!
//! The snapshot serializes with camelCase field names (`updatedAt`) to match
//! the JSON payload consumed by downstream clients.

use serde::{Deserialize, Serialize};

/// A ranked popular article.
///
/// Uniqueness is keyed on the whole (title, href) pair, hence the derived
/// `Eq` and `Hash`. Instances are created while parsing a ranking page and
/// never mutated afterwards.
///
/// # Fields
///
/// * `title` - Headline text, whitespace-collapsed, at least 4 characters
/// * `href` - Absolute article URL containing the `/article/` path marker
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Article {
    /// The headline text.
    pub title: String,
    /// The absolute article URL.
    pub href: String,
}

/// The result of a single collection run.
///
/// Built once per run and immutable after construction. Both lists hold at
/// most 10 entries; `warnings` explains every empty list and notes when the
/// fallback keyword path was taken.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSnapshot {
    /// ISO-8601 UTC timestamp of when the snapshot was assembled.
    pub updated_at: String,
    /// Up to 10 unique realtime keywords, first-seen or frequency order.
    pub keywords: Vec<String>,
    /// Up to 10 unique popular articles.
    pub articles: Vec<Article>,
    /// Human-readable diagnostics accumulated during the run.
    pub warnings: Vec<String>,
}
