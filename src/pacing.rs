// src/pacing.rs
//! Inter-page delay as a strategy seam, so tests run against a zero-delay
//! pacer instead of a real clock.

use std::time::Duration;

#[async_trait::async_trait]
pub trait Pacer: Send + Sync {
    /// Await before the next page request is issued.
    async fn pause(&self);
}

/// Fixed delay between page fetches. Not a backoff policy: no growth,
/// no jitter.
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl Pacer for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// No-op pacer for tests.
pub struct NoDelay;

#[async_trait::async_trait]
impl Pacer for NoDelay {
    async fn pause(&self) {}
}
