//! Tests for the token-bucket rate limiter.
//!
//! Timing assertions run under a paused Tokio clock, so waits are
//! deterministic: the clock only advances when every task is sleeping.

use scrivener_rate_limit::{LimiterConfig, RateLimiter};
use std::sync::Arc;
use tokio::time::{Duration, Instant, advance};

fn limiter(capacity: u32, refill_per_second: f64) -> RateLimiter {
    RateLimiter::new(&LimiterConfig {
        capacity,
        refill_per_second,
    })
}

#[tokio::test(start_paused = true)]
async fn burst_succeeds_without_waiting() {
    let limiter = limiter(10, 2.0);

    let start = Instant::now();
    for _ in 0..10 {
        limiter.acquire("openai").await;
    }
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn eleventh_acquisition_waits_for_one_token() {
    let limiter = limiter(10, 2.0);

    for _ in 0..10 {
        limiter.acquire("openai").await;
    }

    // One token accrues in 1 / 2.0 = 500ms.
    let start = Instant::now();
    limiter.acquire("openai").await;
    let waited = start.elapsed();
    assert!(waited >= Duration::from_millis(500), "waited {:?}", waited);
    assert!(waited < Duration::from_millis(600), "waited {:?}", waited);
}

#[tokio::test(start_paused = true)]
async fn idle_refill_is_capped_at_capacity() {
    let limiter = limiter(3, 2.0);

    for _ in 0..3 {
        limiter.acquire("openai").await;
    }

    // A long idle period must not accrue more than `capacity` tokens.
    advance(Duration::from_secs(3600)).await;

    let start = Instant::now();
    for _ in 0..3 {
        limiter.acquire("openai").await;
    }
    assert_eq!(start.elapsed(), Duration::ZERO);

    // The fourth acquisition pays the full single-token wait again.
    let start = Instant::now();
    limiter.acquire("openai").await;
    assert!(start.elapsed() >= Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn buckets_are_independent_per_provider() {
    let limiter = limiter(2, 1.0);

    limiter.acquire("openai").await;
    limiter.acquire("openai").await;

    // openai is drained; anthropic still has its full burst.
    let start = Instant::now();
    limiter.acquire("anthropic").await;
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn try_acquire_never_waits() {
    let limiter = limiter(2, 2.0);

    assert!(limiter.try_acquire("openai"));
    assert!(limiter.try_acquire("openai"));
    assert!(!limiter.try_acquire("openai"));

    // After 500ms one token has accrued again.
    advance(Duration::from_millis(500)).await;
    assert!(limiter.try_acquire("openai"));
    assert!(!limiter.try_acquire("openai"));
}

#[tokio::test(start_paused = true)]
async fn concurrent_acquisitions_are_serialized() {
    let limiter = Arc::new(limiter(1, 2.0));

    limiter.acquire("openai").await;

    // Two concurrent callers against an empty bucket each pay one wait
    // cycle; neither corrupts the other's refill accounting.
    let start = Instant::now();
    let a = tokio::spawn({
        let limiter = limiter.clone();
        async move { limiter.acquire("openai").await }
    });
    let b = tokio::spawn({
        let limiter = limiter.clone();
        async move { limiter.acquire("openai").await }
    });
    a.await.unwrap();
    b.await.unwrap();

    let waited = start.elapsed();
    assert!(waited >= Duration::from_millis(500), "waited {:?}", waited);
}
