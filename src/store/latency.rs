use std::time::Duration;

/// Artificial delay applied before every store operation.
///
/// Stands in for network round-trips. `Latency::none()` skips the timer
/// entirely so tests run without waiting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latency(Duration);

impl Latency {
    pub const fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub const fn fixed(delay: Duration) -> Self {
        Self(delay)
    }

    pub const fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    pub async fn wait(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}
