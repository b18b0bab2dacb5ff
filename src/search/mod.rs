// src/search/mod.rs
pub mod google;

pub use google::GoogleCseClient;

use anyhow::Result;
use chrono::NaiveDate;

/// One result as returned by the remote search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    /// Published date extracted from page metadata, when the page exposes one.
    pub published: Option<NaiveDate>,
}

/// One page of results plus the offset hint for the next page, if any.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub hits: Vec<SearchHit>,
    pub next_start: Option<u32>,
}

/// Seam between the fetch loop and the remote endpoint; integration tests
/// substitute a scripted implementation.
#[async_trait::async_trait]
pub trait SearchBackend: Send + Sync {
    /// Fetch the page of results beginning at 1-based offset `start`.
    async fn fetch_page(&self, query: &str, start: u32) -> Result<SearchPage>;
    fn name(&self) -> &'static str;
}
