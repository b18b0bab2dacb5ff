//! jobscout — Binary Entrypoint
//! One run: load config, build the query, paginate the search API, filter
//! out seen/unwanted hits, and commit new findings to the CSV and URL logs.

use std::time::Duration;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jobscout::config::AppConfig;
use jobscout::fetch::{collect_new_results, FetchParams};
use jobscout::pacing::FixedDelay;
use jobscout::search::google::{GoogleCseClient, MAX_START};
use jobscout::store;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jobscout=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = AppConfig::load_default()?;
    let query = cfg.query.build_query();
    info!(%query, target = cfg.run.target_count, "starting run");

    let seen = store::load_seen_urls(&cfg.run.url_log)?;
    info!(known_urls = seen.len(), "loaded historical url set");

    let backend = GoogleCseClient::new(cfg.api.key.clone(), cfg.api.engine_id.clone())?;
    let pacer = FixedDelay::new(Duration::from_secs(cfg.run.page_delay_secs));
    let params = FetchParams {
        query: &query,
        avoid_keywords: &cfg.query.avoid_keywords,
        min_date: cfg.query.min_date,
        target: cfg.run.target_count,
        offset_ceiling: MAX_START,
    };

    let report = collect_new_results(&backend, &pacer, &params, &seen).await;
    if report.aborted {
        error!(pages = report.pages, "fetch aborted early; committing partial results");
    }

    store::commit_run(&cfg.run.csv_log, &cfg.run.url_log, &report.accepted)?;
    info!(
        accepted = report.accepted.len(),
        pages = report.pages,
        seen = report.rejected_seen,
        duplicate = report.rejected_duplicate,
        blocked = report.rejected_blocked,
        too_old = report.rejected_old,
        "run complete"
    );
    Ok(())
}
