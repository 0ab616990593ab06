use anyhow::{Result, anyhow};
use std::time::Duration;

use crate::language_utils;

// @module: Run configuration

/// Configuration for one translation run
///
/// Earlier iterations of this tool kept these values as module-level
/// constants; they are passed explicitly into the dispatcher instead, so
/// nothing about a run is process-wide state.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// ISO 639-1 source language code
    pub source_language: String,

    /// ISO 639-1 target language code
    pub target_language: String,

    /// Number of translation tasks allowed in flight at once
    pub workers: usize,

    /// Pause each task takes before releasing its worker slot, as an
    /// outbound rate limit against the remote service
    pub delay: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            source_language: "id".to_string(),
            target_language: "ja".to_string(),
            workers: 6,
            delay: Duration::from_millis(500),
        }
    }
}

impl RunConfig {
    /// Validate the configuration before starting a run
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(anyhow!("Worker count must be at least 1"));
        }

        language_utils::validate_language_code(&self.source_language)
            .map_err(|e| anyhow!("Invalid source language: {}", e))?;

        language_utils::validate_language_code(&self.target_language)
            .map_err(|e| anyhow!("Invalid target language: {}", e))?;

        Ok(())
    }
}
