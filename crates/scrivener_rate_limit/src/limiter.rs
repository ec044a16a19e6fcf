//! Token-bucket rate limiter keyed by provider name.
//!
//! One bucket per provider, created lazily on first use. The token count
//! is recomputed from elapsed time on every access, so it never goes
//! negative and never exceeds capacity. The read-refill-consume sequence
//! is one critical section under a per-bucket async mutex; the lock is
//! held across the wait so the deterministic post-wait write cannot race
//! with another caller's refill.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant, sleep};
use tracing::debug;

/// Token-bucket parameters applied to every provider bucket.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LimiterConfig {
    /// Burst allowance: maximum tokens a bucket can hold.
    pub capacity: u32,
    /// Sustained ceiling: tokens accrued per second.
    pub refill_per_second: f64,
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            refill_per_second: 2.0,
        }
    }
}

#[derive(Debug)]
struct TokenBucket {
    tokens: f64,
    last_refill: Instant,
}

impl TokenBucket {
    /// A bucket starts full, granting the full burst allowance up front.
    fn full(capacity: f64) -> Self {
        Self {
            tokens: capacity,
            last_refill: Instant::now(),
        }
    }

    /// Recompute the token count from elapsed time, capped at capacity.
    fn refill(&mut self, capacity: f64, refill_per_second: f64) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill).as_secs_f64();
        self.tokens = (self.tokens + elapsed * refill_per_second).min(capacity);
        self.last_refill = now;
    }
}

/// Per-provider admission control.
///
/// Construct one limiter at startup and share it by reference; buckets for
/// individual providers are created lazily and live for the process
/// lifetime.
///
/// # Examples
///
/// ```rust,ignore
/// use scrivener_rate_limit::{LimiterConfig, RateLimiter};
///
/// let limiter = RateLimiter::new(&LimiterConfig::default());
/// limiter.acquire("openai").await;
/// // Make the API call...
/// ```
#[derive(Debug)]
pub struct RateLimiter {
    buckets: StdMutex<HashMap<String, Arc<Mutex<TokenBucket>>>>,
    capacity: f64,
    refill_per_second: f64,
}

impl RateLimiter {
    /// Create a limiter applying `config` to every provider bucket.
    pub fn new(config: &LimiterConfig) -> Self {
        Self {
            buckets: StdMutex::new(HashMap::new()),
            capacity: f64::from(config.capacity),
            refill_per_second: config.refill_per_second,
        }
    }

    /// Look up or lazily create the bucket for a provider.
    ///
    /// The map lock is dropped before any wait, so a caller blocked on one
    /// provider never stalls acquisitions against another.
    fn bucket(&self, provider: &str) -> Arc<Mutex<TokenBucket>> {
        let mut buckets = self.buckets.lock().expect("bucket map lock poisoned");
        buckets
            .entry(provider.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(TokenBucket::full(self.capacity))))
            .clone()
    }

    /// Wait until one token is available for `provider`, then consume it.
    ///
    /// Never fails. If the bucket is empty, suspends for exactly the time
    /// one token needs to accrue, then sets the bucket to zero tokens at
    /// the post-wait instant without re-checking. That bounds every
    /// acquisition to a single wait cycle, trading slight imprecision for
    /// a hard upper bound on latency per call.
    pub async fn acquire(&self, provider: &str) {
        let bucket = self.bucket(provider);
        let mut bucket = bucket.lock().await;
        bucket.refill(self.capacity, self.refill_per_second);

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            return;
        }

        let needed = 1.0 - bucket.tokens;
        let wait = Duration::from_secs_f64(needed / self.refill_per_second);
        debug!(provider, wait_ms = wait.as_millis() as u64, "bucket empty, waiting for a token");
        sleep(wait).await;

        bucket.tokens = 0.0;
        bucket.last_refill = Instant::now();
    }

    /// Consume a token for `provider` only if one is available right now.
    ///
    /// Returns `false` without waiting when the bucket is empty or busy.
    pub fn try_acquire(&self, provider: &str) -> bool {
        let bucket = self.bucket(provider);
        let Ok(mut bucket) = bucket.try_lock() else {
            return false;
        };
        bucket.refill(self.capacity, self.refill_per_second);

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(&LimiterConfig::default())
    }
}
