// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod config;
pub mod criteria;
pub mod fetch;
pub mod filter;
pub mod pacing;
pub mod search;
pub mod store;

// ---- Re-exports for stable public API ----
pub use crate::config::AppConfig;
pub use crate::criteria::SearchCriteria;
pub use crate::fetch::{collect_new_results, FetchParams, FetchReport};
pub use crate::pacing::{FixedDelay, NoDelay, Pacer};
pub use crate::search::{SearchBackend, SearchHit, SearchPage};
pub use crate::store::ResultRecord;
