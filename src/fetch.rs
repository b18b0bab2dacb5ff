// src/fetch.rs
//! The paginated dedup fetch loop.
//!
//! Pages are requested sequentially from a [`SearchBackend`], pausing on the
//! [`Pacer`] between requests. Each hit passes through a fixed pipeline:
//! historical dedup, in-run dedup, avoid-keyword blocklist, advisory date
//! bound. The loop stops when the target count is reached (even mid-page),
//! the backend reports no further pages (or a next-offset hint that fails
//! to advance), the next offset would exceed the ceiling, or a fetch fails. A failed fetch aborts the run and keeps
//! whatever was accumulated; there is no retry.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::filter::{normalize_url, published_too_old, title_is_blocked};
use crate::pacing::Pacer;
use crate::search::SearchBackend;
use crate::store::ResultRecord;

#[derive(Debug, Clone)]
pub struct FetchParams<'a> {
    pub query: &'a str,
    pub avoid_keywords: &'a [String],
    pub min_date: Option<NaiveDate>,
    /// Number of accepted results to collect before stopping pagination.
    pub target: usize,
    /// Highest 1-based start offset the endpoint supports.
    pub offset_ceiling: u32,
}

/// What a run accomplished, including per-reason rejection tallies.
#[derive(Debug, Default)]
pub struct FetchReport {
    pub accepted: Vec<ResultRecord>,
    pub pages: u32,
    pub rejected_seen: usize,
    pub rejected_duplicate: usize,
    pub rejected_blocked: usize,
    pub rejected_old: usize,
    /// True when the run stopped on a transport/decode failure.
    pub aborted: bool,
}

/// Run the fetch loop against `backend`. `seen` is the historical set of
/// normalized URLs; no record whose normalized URL is in it is ever emitted.
pub async fn collect_new_results(
    backend: &dyn SearchBackend,
    pacer: &dyn Pacer,
    params: &FetchParams<'_>,
    seen: &HashSet<String>,
) -> FetchReport {
    let mut report = FetchReport::default();
    if params.target == 0 {
        return report;
    }

    // In-run dedup tracks accepted URLs only; a hit rejected by a filter is
    // re-evaluated (and re-rejected) if it shows up again.
    let mut accepted_keys: HashSet<String> = HashSet::new();
    let mut start: u32 = 1;

    loop {
        if report.pages > 0 {
            pacer.pause().await;
        }
        let page = match backend.fetch_page(params.query, start).await {
            Ok(p) => p,
            Err(e) => {
                warn!(
                    error = ?e,
                    backend = backend.name(),
                    start,
                    "page fetch failed; keeping partial results"
                );
                report.aborted = true;
                break;
            }
        };
        report.pages += 1;
        debug!(start, hits = page.hits.len(), "fetched page");

        for hit in &page.hits {
            if report.accepted.len() >= params.target {
                break;
            }
            let key = normalize_url(&hit.url);
            if seen.contains(&key) {
                report.rejected_seen += 1;
                continue;
            }
            if accepted_keys.contains(&key) {
                report.rejected_duplicate += 1;
                continue;
            }
            if title_is_blocked(&hit.title, params.avoid_keywords) {
                report.rejected_blocked += 1;
                continue;
            }
            if published_too_old(hit, params.min_date) {
                report.rejected_old += 1;
                continue;
            }
            accepted_keys.insert(key);
            report.accepted.push(ResultRecord {
                title: hit.title.clone(),
                url: hit.url.clone(),
            });
        }

        if report.accepted.len() >= params.target {
            break;
        }
        // A hint that fails to advance past the current offset counts as
        // "no further pages"; trusting it verbatim would loop forever on a
        // misbehaving endpoint.
        match page.next_start {
            Some(next) if next > start && next <= params.offset_ceiling => start = next,
            Some(next) => {
                debug!(
                    next,
                    start,
                    ceiling = params.offset_ceiling,
                    "offset hint unusable; stopping"
                );
                break;
            }
            None => break,
        }
    }

    report
}
