//! Tests for the retry policy.

use scrivener_error::{ReviewError, ReviewErrorKind, ScrivenerError, ScrivenerResult};
use scrivener_rate_limit::{RetryConfig, with_retry};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use tokio::time::{Duration, Instant};

/// Scripted operation: fails `failures` times with errors from `make_err`,
/// then succeeds. Records how many times it was invoked.
fn scripted(
    failures: u32,
    make_err: impl Fn() -> ScrivenerError + Send + Sync + 'static,
) -> (
    Arc<AtomicU32>,
    impl Fn() -> std::pin::Pin<Box<dyn Future<Output = ScrivenerResult<String>> + Send>>,
) {
    let calls = Arc::new(AtomicU32::new(0));
    let make_err = Arc::new(make_err);
    let op = {
        let calls = calls.clone();
        move || {
            let calls = calls.clone();
            let make_err = make_err.clone();
            let future = async move {
                let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
                if attempt <= failures {
                    Err(make_err())
                } else {
                    Ok("analysis".to_string())
                }
            };
            Box::pin(future) as std::pin::Pin<Box<dyn Future<Output = ScrivenerResult<String>> + Send>>
        }
    };
    (calls, op)
}

#[tokio::test]
async fn success_on_first_attempt_does_not_retry() {
    let (calls, op) = scripted(0, || ReviewError::api("unused").into());
    let result = with_retry(&RetryConfig::default(), op).await;
    assert_eq!(result.unwrap(), "analysis");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn api_errors_exhaust_after_max_attempts() {
    let (calls, op) = scripted(u32::MAX, || ReviewError::api("server error").into());
    let err = with_retry(&RetryConfig::default(), op).await.unwrap_err();

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    let review = err.as_review().expect("classified error");
    assert!(matches!(review.kind(), ReviewErrorKind::Api(_)));
}

#[tokio::test]
async fn validation_errors_are_never_retried() {
    let (calls, op) = scripted(u32::MAX, || ReviewError::validation("empty clause").into());
    let err = with_retry(&RetryConfig::default(), op).await.unwrap_err();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(err.as_review().expect("classified error").is_validation());
}

#[tokio::test(start_paused = true)]
async fn retry_after_hint_overrides_computed_delay() {
    let (calls, op) = scripted(1, || {
        ReviewError::rate_limit("quota exceeded")
            .with_retry_after(Duration::from_millis(200))
            .into()
    });

    let start = Instant::now();
    let result = with_retry(&RetryConfig::default(), op).await;
    let waited = start.elapsed();

    assert_eq!(result.unwrap(), "analysis");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    // The 200ms hint wins over the 1s computed initial delay.
    assert!(waited >= Duration::from_millis(200), "waited {:?}", waited);
    assert!(waited < Duration::from_millis(1000), "waited {:?}", waited);
}

#[tokio::test(start_paused = true)]
async fn backoff_doubles_between_attempts() {
    let (_, op) = scripted(u32::MAX, || ReviewError::network("timeout").into());

    let start = Instant::now();
    let _ = with_retry(&RetryConfig::default(), op).await;
    let waited = start.elapsed();

    // Three attempts with 1s and 2s delays in between.
    assert!(waited >= Duration::from_millis(3000), "waited {:?}", waited);
    assert!(waited < Duration::from_millis(3200), "waited {:?}", waited);
}

#[tokio::test(start_paused = true)]
async fn computed_delay_is_capped_at_max_delay() {
    let (_, op) = scripted(u32::MAX, || ReviewError::network("timeout").into());
    let config = RetryConfig {
        max_attempts: 6,
        initial_delay_ms: 1000,
        backoff_factor: 2,
        max_delay_ms: 4000,
    };

    let start = Instant::now();
    let _ = with_retry(&config, op).await;
    let waited = start.elapsed();

    // Uncapped the delays would be 1+2+4+8+16 = 31s; capped at 4s each
    // they sum to 1+2+4+4+4 = 15s.
    assert!(waited >= Duration::from_secs(15), "waited {:?}", waited);
    assert!(waited < Duration::from_secs(16), "waited {:?}", waited);
}

#[tokio::test]
async fn single_attempt_config_fails_fast() {
    let (calls, op) = scripted(u32::MAX, || ReviewError::api("server error").into());
    let config = RetryConfig {
        max_attempts: 1,
        ..RetryConfig::default()
    };

    let err = with_retry(&config, op).await.unwrap_err();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(err.as_review().is_some());
}
