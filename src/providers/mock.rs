/*!
 * Mock translator for testing.
 *
 * Behavior modes:
 * - `MockTranslator::working()` - always succeeds with a tagged echo
 * - `MockTranslator::failing()` - always fails with an error
 * - `MockTranslator::jittered(max_ms)` - random per-request delay, then succeeds
 * - `MockTranslator::slow(delay_ms)` - fixed delay, then succeeds
 *
 * A mapping table and per-text failure list refine any succeeding mode,
 * and a shared request counter lets tests assert how many provider calls
 * actually happened.
 */

use async_trait::async_trait;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::time::{Duration, sleep};

use crate::errors::ProviderError;
use crate::providers::Translator;

/// Behavior mode for the mock translator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds
    Working,
    /// Always fails with an error
    Failing,
    /// Sleeps a random duration up to `max_ms` before succeeding, to
    /// scramble completion order in concurrency tests
    Jittered { max_ms: u64 },
    /// Sleeps a fixed duration before succeeding
    Slow { delay_ms: u64 },
}

/// Mock translation provider for testing dispatcher behavior
#[derive(Debug)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Shared request counter
    request_count: Arc<AtomicUsize>,
    /// Exact input -> output pairs; inputs not listed get a tagged echo
    mapping: HashMap<String, String>,
    /// Inputs that fail even in a succeeding mode
    fail_on: HashSet<String>,
}

impl MockTranslator {
    /// Create a new mock translator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        MockTranslator {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            mapping: HashMap::new(),
            fail_on: HashSet::new(),
        }
    }

    /// Create a working mock that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock with random per-request delays
    pub fn jittered(max_ms: u64) -> Self {
        Self::new(MockBehavior::Jittered { max_ms })
    }

    /// Create a mock with a fixed per-request delay
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Set exact input -> output translation pairs
    pub fn with_mapping(mut self, pairs: &[(&str, &str)]) -> Self {
        for (from, to) in pairs {
            self.mapping.insert((*from).to_string(), (*to).to_string());
        }
        self
    }

    /// Fail whenever the given text is requested
    pub fn fail_on(mut self, text: &str) -> Self {
        self.fail_on.insert(text.to_string());
        self
    }

    /// Number of translate calls made so far (shared across clones)
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    fn respond(&self, target_language: &str, text: &str) -> Result<String, ProviderError> {
        if self.fail_on.contains(text) {
            return Err(ProviderError::ApiError {
                status_code: 503,
                message: format!("simulated failure for: {}", text),
            });
        }

        match self.mapping.get(text) {
            Some(mapped) => Ok(mapped.clone()),
            None => Ok(format!("[{}] {}", target_language, text)),
        }
    }
}

impl Clone for MockTranslator {
    fn clone(&self) -> Self {
        MockTranslator {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            mapping: self.mapping.clone(),
            fail_on: self.fail_on.clone(),
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        _source_language: &str,
        target_language: &str,
        text: &str,
    ) -> Result<String, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => self.respond(target_language, text),

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "simulated provider failure".to_string(),
            }),

            MockBehavior::Jittered { max_ms } => {
                let delay_ms = rand::rng().random_range(0..=max_ms);
                sleep(Duration::from_millis(delay_ms)).await;
                self.respond(target_language, text)
            }

            MockBehavior::Slow { delay_ms } => {
                sleep(Duration::from_millis(delay_ms)).await;
                self.respond(target_language, text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_working_mock_should_echo_with_target_tag() {
        let mock = MockTranslator::working();
        let translated = mock.translate("id", "ja", "Halo").await.unwrap();
        assert_eq!(translated, "[ja] Halo");
    }

    #[tokio::test]
    async fn test_mapping_should_override_echo() {
        let mock = MockTranslator::working().with_mapping(&[("Halo", "Hello")]);
        assert_eq!(mock.translate("id", "en", "Halo").await.unwrap(), "Hello");
        assert_eq!(mock.translate("id", "en", "Pagi").await.unwrap(), "[en] Pagi");
    }

    #[tokio::test]
    async fn test_failing_mock_should_return_error() {
        let mock = MockTranslator::failing();
        assert!(mock.translate("id", "ja", "Halo").await.is_err());
    }

    #[tokio::test]
    async fn test_fail_on_should_only_fail_listed_text() {
        let mock = MockTranslator::working().fail_on("bad");
        assert!(mock.translate("id", "ja", "bad").await.is_err());
        assert!(mock.translate("id", "ja", "good").await.is_ok());
    }

    #[tokio::test]
    async fn test_cloned_mock_should_share_request_count() {
        let mock = MockTranslator::working();
        let cloned = mock.clone();

        mock.translate("id", "ja", "one").await.unwrap();
        cloned.translate("id", "ja", "two").await.unwrap();

        assert_eq!(mock.request_count(), 2);
        assert_eq!(cloned.request_count(), 2);
    }
}
