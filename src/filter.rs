// src/filter.rs
//! Pure predicates applied to fetched hits: URL normalization (the dedup
//! key), avoid-keyword blocklist, and the advisory date bound.

use chrono::NaiveDate;

use crate::search::SearchHit;

/// Normalize a URL for dedup comparison: trim whitespace, lowercase.
pub fn normalize_url(url: &str) -> String {
    url.trim().to_lowercase()
}

/// Case-insensitive substring match of any avoid-keyword against the title.
pub fn title_is_blocked(title: &str, avoid_keywords: &[String]) -> bool {
    if avoid_keywords.is_empty() {
        return false;
    }
    let haystack = title.to_lowercase();
    avoid_keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .any(|k| haystack.contains(&k))
}

/// Date filter is advisory: a hit with no extractable published date is
/// never rejected on this basis.
pub fn published_too_old(hit: &SearchHit, min_date: Option<NaiveDate>) -> bool {
    match (hit.published, min_date) {
        (Some(published), Some(min)) => published < min,
        _ => false,
    }
}
