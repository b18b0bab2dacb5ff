// src/config.rs
//! Run configuration, loaded once at startup and passed down explicitly —
//! no process-wide mutable state.

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::criteria::SearchCriteria;

const ENV_CONFIG_PATH: &str = "JOBSCOUT_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/jobscout.toml";
const ENV_API_KEY: &str = "JOBSCOUT_API_KEY";

fn default_target_count() -> usize {
    25
}
fn default_page_delay_secs() -> u64 {
    2
}
fn default_url_log() -> PathBuf {
    PathBuf::from("data/seen_urls.txt")
}
fn default_csv_log() -> PathBuf {
    PathBuf::from("data/results.csv")
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// The literal "ENV" means: read the key from $JOBSCOUT_API_KEY.
    pub key: String,
    pub engine_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Accepted results to collect before pagination stops.
    #[serde(default = "default_target_count")]
    pub target_count: usize,
    #[serde(default = "default_url_log")]
    pub url_log: PathBuf,
    #[serde(default = "default_csv_log")]
    pub csv_log: PathBuf,
    /// Fixed delay between page requests.
    #[serde(default = "default_page_delay_secs")]
    pub page_delay_secs: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            target_count: default_target_count(),
            url_log: default_url_log(),
            csv_log: default_csv_log(),
            page_delay_secs: default_page_delay_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub query: SearchCriteria,
}

impl AppConfig {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let mut cfg: AppConfig = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;

        // Resolve api key if "ENV"
        if cfg.api.key.trim().eq_ignore_ascii_case("env") {
            cfg.api.key = env::var(ENV_API_KEY)
                .map_err(|_| anyhow!("Missing {ENV_API_KEY} env var"))?;
        }
        if cfg.api.key.trim().is_empty() {
            bail!("api.key must not be empty");
        }
        if cfg.api.engine_id.trim().is_empty() {
            bail!("api.engine_id must not be empty");
        }
        Ok(cfg)
    }

    /// Load using env var + fallback:
    /// 1) $JOBSCOUT_CONFIG
    /// 2) config/jobscout.toml
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            }
            return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
        }
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }
}
