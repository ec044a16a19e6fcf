//! Contract tests for the provider adapters that need no network access.

use scrivener_core::{ReviewKind, ReviewRequest};
use scrivener_interface::ReviewDriver;
use scrivener_models::{AnthropicReviewer, OpenAiReviewer, PerplexityReviewer};

fn drivers() -> Vec<Box<dyn ReviewDriver>> {
    vec![
        Box::new(OpenAiReviewer::new("test-key", OpenAiReviewer::default_model())),
        Box::new(AnthropicReviewer::new(
            "test-key",
            AnthropicReviewer::default_model(),
        )),
        Box::new(PerplexityReviewer::new(
            "test-key",
            PerplexityReviewer::default_model(),
        )),
    ]
}

#[test]
fn names_and_priorities_define_the_fallback_order() {
    let drivers = drivers();
    let mut pairs: Vec<(&str, u8)> = drivers
        .iter()
        .map(|d| (d.provider_name(), d.priority()))
        .collect();
    pairs.sort_by_key(|(_, priority)| *priority);

    assert_eq!(
        pairs,
        vec![("openai", 1), ("anthropic", 2), ("perplexity", 3)]
    );
}

#[test]
fn generate_prompt_embeds_the_clause() {
    let request = ReviewRequest::builder()
        .clause("Either party may terminate with thirty days notice.".to_string())
        .kind(ReviewKind::Risks)
        .build()
        .unwrap();

    for driver in drivers() {
        let prompt = driver.generate_prompt(&request).unwrap();
        assert!(
            prompt.contains("thirty days notice"),
            "{} prompt missing clause",
            driver.provider_name()
        );
    }
}

#[test]
fn generate_prompt_rejects_empty_clause_with_provider_stamp() {
    let request = ReviewRequest::builder()
        .clause("   ".to_string())
        .kind(ReviewKind::Improvements)
        .build()
        .unwrap();

    for driver in drivers() {
        let err = driver.generate_prompt(&request).unwrap_err();
        let review = err.as_review().expect("classified error");
        assert!(review.is_validation());
        assert_eq!(review.provider(), Some(driver.provider_name()));
    }
}
