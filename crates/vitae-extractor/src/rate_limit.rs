//! Pacing between chunk calls

use std::time::Duration;

/// Decides how long to wait before each chunk call
pub trait RateLimitPolicy: Send + Sync {
    /// Delay before the batch at `batch_index` (zero-based)
    fn delay_before(&self, batch_index: usize) -> Duration;
}

/// The same pause before every chunk call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl Default for FixedDelay {
    fn default() -> Self {
        FixedDelay(Duration::from_secs(5))
    }
}

impl RateLimitPolicy for FixedDelay {
    fn delay_before(&self, _batch_index: usize) -> Duration {
        self.0
    }
}

/// No pause at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDelay;

impl RateLimitPolicy for NoDelay {
    fn delay_before(&self, _batch_index: usize) -> Duration {
        Duration::ZERO
    }
}
