//! The orchestrator: limiter + retry around each adapter, fallback across
//! providers.

use scrivener_core::{ReviewRequest, ReviewResult};
use scrivener_error::{ConfigError, ReviewError, ScrivenerError, ScrivenerResult};
use scrivener_interface::ReviewDriver;
use scrivener_models::{AnthropicReviewer, OpenAiReviewer, PerplexityReviewer};
use scrivener_rate_limit::{RateLimiter, RetryConfig, ScrivenerConfig, with_retry};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Holds the configured provider adapters and serves review requests.
///
/// Construct one manager at startup and share it by reference; every
/// concurrent `review` call runs independently against the shared
/// per-provider token buckets.
///
/// # Examples
///
/// ```rust,ignore
/// use scrivener::{ReviewManager, ScrivenerConfig};
///
/// let config = ScrivenerConfig::load()?;
/// let manager = ReviewManager::from_env(&config)?;
/// let result = manager.review(&request).await?;
/// ```
pub struct ReviewManager {
    /// Adapters in ascending priority order; ties keep registration order.
    drivers: Vec<Arc<dyn ReviewDriver>>,
    limiter: RateLimiter,
    retry: RetryConfig,
}

impl std::fmt::Debug for ReviewManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewManager")
            .field("providers", &self.providers())
            .field("limiter", &self.limiter)
            .field("retry", &self.retry)
            .finish()
    }
}

impl ReviewManager {
    /// Create a manager over an explicit set of adapters.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `drivers` is empty — running
    /// without a single provider is a fatal startup condition, not a
    /// runtime one.
    pub fn new(
        mut drivers: Vec<Arc<dyn ReviewDriver>>,
        config: &ScrivenerConfig,
    ) -> ScrivenerResult<Self> {
        if drivers.is_empty() {
            return Err(ConfigError::new(
                "no review providers configured; supply at least one API key",
            )
            .into());
        }

        // Stable sort: equal priorities keep registration order.
        drivers.sort_by_key(|driver| driver.priority());
        debug!(
            providers = ?drivers.iter().map(|d| d.provider_name()).collect::<Vec<_>>(),
            "review manager initialized"
        );

        Ok(Self {
            drivers,
            limiter: RateLimiter::new(&config.limiter),
            retry: config.retry,
        })
    }

    /// Create a manager from whichever provider credentials are present in
    /// the environment (`OPENAI_API_KEY`, `ANTHROPIC_API_KEY`,
    /// `PERPLEXITY_API_KEY`).
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no credential is set at all.
    pub fn from_env(config: &ScrivenerConfig) -> ScrivenerResult<Self> {
        let mut drivers: Vec<Arc<dyn ReviewDriver>> = Vec::new();

        if std::env::var("OPENAI_API_KEY").is_ok() {
            let model = config
                .model_for("openai")
                .unwrap_or(OpenAiReviewer::default_model());
            drivers.push(Arc::new(OpenAiReviewer::from_env(model)?));
        }
        if std::env::var("ANTHROPIC_API_KEY").is_ok() {
            let model = config
                .model_for("anthropic")
                .unwrap_or(AnthropicReviewer::default_model());
            drivers.push(Arc::new(AnthropicReviewer::from_env(model)?));
        }
        if std::env::var("PERPLEXITY_API_KEY").is_ok() {
            let model = config
                .model_for("perplexity")
                .unwrap_or(PerplexityReviewer::default_model());
            drivers.push(Arc::new(PerplexityReviewer::from_env(model)?));
        }

        Self::new(drivers, config)
    }

    /// Configured provider names in fallback order.
    pub fn providers(&self) -> Vec<&'static str> {
        self.drivers.iter().map(|d| d.provider_name()).collect()
    }

    fn driver(&self, name: &str) -> Option<&Arc<dyn ReviewDriver>> {
        self.drivers.iter().find(|d| d.provider_name() == name)
    }

    /// Produce one analysis for the request.
    ///
    /// An explicit `request.provider` naming a configured adapter is
    /// honored strictly: only that adapter is attempted and its failure
    /// propagates as-is. Otherwise adapters are tried in ascending
    /// priority order until one succeeds. Validation failures
    /// short-circuit the whole call; if every adapter fails with a rate
    /// limit, the last adapter's rate-limit error surfaces so callers can
    /// distinguish "retry later" from "service degraded".
    #[instrument(skip(self, request), fields(kind = %request.kind))]
    pub async fn review(&self, request: &ReviewRequest) -> ScrivenerResult<ReviewResult> {
        if let Some(name) = request.provider.as_deref() {
            if let Some(driver) = self.driver(name) {
                debug!(provider = name, "honoring explicit provider choice");
                return self.attempt(driver.as_ref(), request).await;
            }
            warn!(
                provider = name,
                "requested provider not configured, using priority order"
            );
        }

        let mut failures: Vec<ScrivenerError> = Vec::new();
        for driver in &self.drivers {
            let name = driver.provider_name();
            match self.attempt(driver.as_ref(), request).await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    // A malformed request is a caller bug; no other
                    // provider would fare better.
                    if err.as_review().is_some_and(|e| e.is_validation()) {
                        return Err(err);
                    }
                    warn!(provider = name, error = %err, "provider failed, trying next");
                    failures.push(err);
                }
            }
        }

        let all_rate_limited = !failures.is_empty()
            && failures
                .iter()
                .all(|e| e.as_review().is_some_and(|r| r.is_rate_limit()));
        if all_rate_limited {
            // All capacity exhausted; not worth retrying another provider.
            if let Some(last) = failures.pop() {
                return Err(last);
            }
        }

        Err(ReviewError::exhausted("all configured providers failed").into())
    }

    /// One provider attempt: validate/prompt, admission control, bounded
    /// retry around the single-call adapter.
    async fn attempt(
        &self,
        driver: &dyn ReviewDriver,
        request: &ReviewRequest,
    ) -> ScrivenerResult<ReviewResult> {
        let name = driver.provider_name();

        let prompt = driver.generate_prompt(request)?;
        self.limiter.acquire(name).await;
        let analysis = with_retry(&self.retry, || driver.call_once(&prompt)).await?;

        debug!(provider = name, "analysis produced");
        Ok(ReviewResult::new(analysis, name))
    }
}
