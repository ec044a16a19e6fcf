#![cfg(feature = "api")]

//! Tests that make real API calls.
//!
//! Run with `cargo test -p scrivener_models --features api` and the
//! relevant `*_API_KEY` variables set (a `.env` file works).

use scrivener_core::{ReviewKind, ReviewRequest};
use scrivener_interface::ReviewDriver;
use scrivener_models::{AnthropicReviewer, OpenAiReviewer};

fn request() -> ReviewRequest {
    ReviewRequest::builder()
        .clause("The supplier may change prices at any time without notice.".to_string())
        .kind(ReviewKind::Risks)
        .build()
        .unwrap()
}

#[tokio::test]
async fn openai_returns_non_empty_analysis() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let driver = OpenAiReviewer::from_env(OpenAiReviewer::default_model())?;

    let prompt = driver.generate_prompt(&request())?;
    let analysis = driver.call_once(&prompt).await?;

    assert!(!analysis.trim().is_empty());
    Ok(())
}

#[tokio::test]
async fn anthropic_returns_non_empty_analysis() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let driver = AnthropicReviewer::from_env(AnthropicReviewer::default_model())?;

    let prompt = driver.generate_prompt(&request())?;
    let analysis = driver.call_once(&prompt).await?;

    assert!(!analysis.trim().is_empty());
    Ok(())
}
