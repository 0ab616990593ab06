/*!
 * Provider implementations for translation services.
 *
 * This module contains the client trait for external translation services
 * and its implementations:
 * - Google: free Google Translate web endpoint
 * - Mock: configurable test double
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all translation providers
///
/// The provider is treated as an untrusted network collaborator: any call
/// may fail, and callers decide how to recover.
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate text between two languages
    ///
    /// # Arguments
    /// * `source_language` - ISO 639-1 source language code
    /// * `target_language` - ISO 639-1 target language code
    /// * `text` - The text to translate
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(
        &self,
        source_language: &str,
        target_language: &str,
        text: &str,
    ) -> Result<String, ProviderError>;
}

pub mod google;
pub mod mock;
