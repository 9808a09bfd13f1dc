//! Simulated network latency.
//!
//! Every fetch entry point pauses on this seam before touching the cache or
//! catalog, mimicking a network boundary. The trait is injectable so tests
//! run with zero real wait.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

/// An awaitable pause. Never fails, cannot be cancelled.
#[async_trait]
pub trait Latency: Send + Sync {
    async fn pause(&self);
}

/// A bounded random delay backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    min: Duration,
    max: Duration,
}

impl SimulatedLatency {
    /// Create a delay uniformly sampled from `[min, max]`.
    pub fn new(min: Duration, max: Duration) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(Duration::from_millis(50), Duration::from_millis(300))
    }
}

#[async_trait]
impl Latency for SimulatedLatency {
    async fn pause(&self) {
        // Sample before the await so the rng is not held across it.
        let delay = rand::thread_rng().gen_range(self.min..=self.max);
        tokio::time::sleep(delay).await;
    }
}

/// No delay at all, for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn pause(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_latency_waits_at_least_min() {
        let latency = SimulatedLatency::new(Duration::from_millis(5), Duration::from_millis(10));
        let start = std::time::Instant::now();
        latency.pause().await;
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[tokio::test]
    async fn test_no_latency_is_immediate() {
        let start = std::time::Instant::now();
        NoLatency.pause().await;
        assert!(start.elapsed() < Duration::from_millis(5));
    }
}
