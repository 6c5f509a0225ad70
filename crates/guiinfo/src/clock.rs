#![forbid(unsafe_code)]

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

#[async_trait::async_trait]
pub trait Clock: Send + Sync {
    /// Current wall-clock time as unix seconds.
    fn wall_secs(&self) -> i64;

    /// Monotonic milliseconds since an arbitrary epoch.
    fn monotonic_ms(&self) -> u64;

    async fn sleep(&self, duration: Duration);
}

#[derive(Debug)]
pub struct SystemClock {
    started: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

#[async_trait::async_trait]
impl Clock for SystemClock {
    fn wall_secs(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as i64)
            .unwrap_or(0)
    }

    fn monotonic_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
