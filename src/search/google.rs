// src/search/google.rs
//! Google Custom Search JSON API client.
//!
//! Wire shape: GET customsearch/v1 with `key`, `cx`, `q`, `start`, `num`;
//! the response carries `items[]` and a `queries.nextPage[0].startIndex`
//! hint when more pages exist.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;

use crate::search::{SearchBackend, SearchHit, SearchPage};

const ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";
const PAGE_SIZE: u32 = 10;

/// The API serves at most 100 results; a `start` beyond this is rejected.
pub const MAX_START: u32 = 91;

/// Metatag keys probed for a published date, in order of preference.
const DATE_METATAGS: [&str; 3] = ["article:published_time", "og:published_time", "date"];

#[derive(Debug, Deserialize)]
struct CseResponse {
    #[serde(default)]
    items: Vec<CseItem>,
    #[serde(default)]
    queries: CseQueries,
}

#[derive(Debug, Default, Deserialize)]
struct CseQueries {
    #[serde(rename = "nextPage", default)]
    next_page: Vec<CsePageInfo>,
}

#[derive(Debug, Deserialize)]
struct CsePageInfo {
    #[serde(rename = "startIndex")]
    start_index: u32,
}

#[derive(Debug, Deserialize)]
struct CseItem {
    title: Option<String>,
    link: Option<String>,
    #[serde(default)]
    pagemap: Option<CsePageMap>,
}

#[derive(Debug, Default, Deserialize)]
struct CsePageMap {
    #[serde(default)]
    metatags: Vec<serde_json::Map<String, serde_json::Value>>,
}

pub struct GoogleCseClient {
    http: reqwest::Client,
    api_key: String,
    engine_id: String,
}

impl GoogleCseClient {
    pub fn new(api_key: String, engine_id: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("building http client")?;
        Ok(Self {
            http,
            api_key,
            engine_id,
        })
    }
}

#[async_trait]
impl SearchBackend for GoogleCseClient {
    async fn fetch_page(&self, query: &str, start: u32) -> Result<SearchPage> {
        let resp = self
            .http
            .get(ENDPOINT)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", query),
                ("start", &start.to_string()),
                ("num", &PAGE_SIZE.to_string()),
            ])
            .send()
            .await
            .context("custom search get()")?
            .error_for_status()
            .context("custom search status")?
            .json::<CseResponse>()
            .await
            .context("decoding custom search response")?;
        Ok(page_from_response(resp))
    }

    fn name(&self) -> &'static str {
        "GoogleCse"
    }
}

fn page_from_response(resp: CseResponse) -> SearchPage {
    let mut hits = Vec::with_capacity(resp.items.len());
    for item in resp.items {
        let (title, link) = match (item.title, item.link) {
            (Some(t), Some(l)) => (t, l),
            _ => continue,
        };
        let published = item
            .pagemap
            .as_ref()
            .and_then(|pm| extract_published(&pm.metatags));
        hits.push(SearchHit {
            title,
            url: link,
            published,
        });
    }
    SearchPage {
        hits,
        next_start: resp.queries.next_page.first().map(|p| p.start_index),
    }
}

/// Probe the page metatags for a published date. Pages without a parseable
/// date yield `None`; downstream date filtering never rejects those.
fn extract_published(metatags: &[serde_json::Map<String, serde_json::Value>]) -> Option<NaiveDate> {
    for tags in metatags {
        for key in DATE_METATAGS {
            if let Some(raw) = tags.get(key).and_then(|v| v.as_str()) {
                if let Some(d) = parse_date(raw) {
                    return Some(d);
                }
            }
        }
    }
    None
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    // Fall back to a plain YYYY-MM-DD prefix.
    let prefix = raw.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}
