// tests/fetch_filters.rs
use std::collections::HashSet;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use jobscout::fetch::{collect_new_results, FetchParams};
use jobscout::pacing::NoDelay;
use jobscout::search::{SearchBackend, SearchHit, SearchPage};

struct OnePage(Vec<SearchHit>);

#[async_trait]
impl SearchBackend for OnePage {
    async fn fetch_page(&self, _query: &str, start: u32) -> Result<SearchPage> {
        assert_eq!(start, 1);
        Ok(SearchPage {
            hits: self.0.clone(),
            next_start: None,
        })
    }
    fn name(&self) -> &'static str {
        "OnePage"
    }
}

fn hit(title: &str, url: &str, published: Option<NaiveDate>) -> SearchHit {
    SearchHit {
        title: title.to_string(),
        url: url.to_string(),
        published,
    }
}

#[tokio::test]
async fn avoid_keywords_match_case_insensitive_substrings() {
    let backend = OnePage(vec![
        hit(
            "Senior Frontend Developer (Cleared — Government Clearance Required)",
            "https://jobs.test/cleared",
            None,
        ),
        hit("Frontend Developer", "https://jobs.test/plain", None),
    ]);
    let avoid = vec!["government clearance".to_string()];
    let params = FetchParams {
        query: "q",
        avoid_keywords: &avoid,
        min_date: None,
        target: 10,
        offset_ceiling: 91,
    };

    let report = collect_new_results(&backend, &NoDelay, &params, &HashSet::new()).await;
    assert_eq!(report.accepted.len(), 1);
    assert_eq!(report.accepted[0].url, "https://jobs.test/plain");
    assert_eq!(report.rejected_blocked, 1);
}

#[tokio::test]
async fn date_filter_rejects_old_but_passes_undated() {
    let backend = OnePage(vec![
        hit(
            "Dated, too old",
            "https://jobs.test/old",
            NaiveDate::from_ymd_opt(2024, 12, 1),
        ),
        hit(
            "Dated, fresh",
            "https://jobs.test/fresh",
            NaiveDate::from_ymd_opt(2025, 2, 1),
        ),
        hit("No date at all", "https://jobs.test/undated", None),
    ]);
    let params = FetchParams {
        query: "q",
        avoid_keywords: &[],
        min_date: NaiveDate::from_ymd_opt(2025, 1, 1),
        target: 10,
        offset_ceiling: 91,
    };

    let report = collect_new_results(&backend, &NoDelay, &params, &HashSet::new()).await;
    let urls: Vec<&str> = report.accepted.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["https://jobs.test/fresh", "https://jobs.test/undated"]);
    assert_eq!(report.rejected_old, 1);
}

#[tokio::test]
async fn dedup_runs_before_keyword_and_date_filters() {
    // A historical URL with a blocked title must count as seen, not blocked.
    let backend = OnePage(vec![hit(
        "Senior role",
        "https://jobs.test/senior",
        NaiveDate::from_ymd_opt(2020, 1, 1),
    )]);
    let avoid = vec!["senior".to_string()];
    let params = FetchParams {
        query: "q",
        avoid_keywords: &avoid,
        min_date: NaiveDate::from_ymd_opt(2025, 1, 1),
        target: 10,
        offset_ceiling: 91,
    };
    let seen = HashSet::from(["https://jobs.test/senior".to_string()]);

    let report = collect_new_results(&backend, &NoDelay, &params, &seen).await;
    assert!(report.accepted.is_empty());
    assert_eq!(report.rejected_seen, 1);
    assert_eq!(report.rejected_blocked, 0);
    assert_eq!(report.rejected_old, 0);
}
