/*!
 * Parallel translation dispatch.
 *
 * Fans out one task per caption block to a bounded worker pool, collects
 * results as they complete, and reassembles them in document order via
 * position-indexed writes.
 */

use anyhow::{Result, anyhow};
use futures::stream::{self, StreamExt};
use log::warn;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;

use crate::app_config::RunConfig;
use crate::providers::Translator;
use crate::subtitle_processor::{BlockKind, CaptionBlock};
use crate::translation::formatting::wrap_sentences;

/// Dispatcher that translates caption blocks in parallel
pub struct BlockDispatcher<P: Translator + 'static> {
    /// The translation provider shared across worker tasks
    provider: Arc<P>,

    /// Run configuration (languages, worker bound, per-task delay)
    config: RunConfig,
}

impl<P: Translator + 'static> BlockDispatcher<P> {
    /// Create a new dispatcher
    pub fn new(provider: P, config: RunConfig) -> Self {
        BlockDispatcher {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Translate all blocks, returning finished block strings in the same
    /// order the blocks appeared in the document.
    ///
    /// Guarantees:
    /// - exactly one task per block, at most `workers` in flight
    /// - a provider failure degrades that block to its original text and
    ///   never aborts sibling tasks
    /// - every task pauses for the configured delay before releasing its
    ///   worker slot, passthrough blocks included
    /// - `progress_callback(completed, total)` fires once per finished task
    pub async fn translate_all(
        &self,
        blocks: &[CaptionBlock],
        progress_callback: impl Fn(usize, usize) + Clone + Send + 'static,
    ) -> Result<Vec<String>> {
        let total = blocks.len();
        let semaphore = Arc::new(Semaphore::new(self.config.workers));
        let completed = Arc::new(AtomicUsize::new(0));

        let results = stream::iter(blocks.iter().cloned())
            .map(|block| {
                let provider = Arc::clone(&self.provider);
                let semaphore = Arc::clone(&semaphore);
                let completed = Arc::clone(&completed);
                let progress_callback = progress_callback.clone();
                let source_language = self.config.source_language.clone();
                let target_language = self.config.target_language.clone();
                let delay = self.config.delay;

                async move {
                    // Acquire a permit from the semaphore
                    let _permit = semaphore.acquire().await.unwrap();

                    let position = block.position;
                    let rendered =
                        translate_block(provider.as_ref(), &block, &source_language, &target_language)
                            .await;

                    // Outbound rate limit: pause before releasing the slot
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }

                    let current = completed.fetch_add(1, Ordering::SeqCst) + 1;
                    progress_callback(current, total);

                    (position, rendered)
                }
            })
            .buffer_unordered(self.config.workers)
            .collect::<Vec<_>>()
            .await;

        // Completion order is arbitrary; positions restore document order.
        // Each slot is written exactly once.
        let mut output: Vec<Option<String>> = vec![None; total];
        for (position, rendered) in results {
            output[position] = Some(rendered);
        }

        output
            .into_iter()
            .enumerate()
            .map(|(position, slot)| {
                slot.ok_or_else(|| anyhow!("No result collected for block at position {}", position))
            })
            .collect()
    }
}

/// Translate one block, degrading to the original text if the provider
/// fails. Passthrough blocks are returned untouched without a provider call.
async fn translate_block<P: Translator>(
    provider: &P,
    block: &CaptionBlock,
    source_language: &str,
    target_language: &str,
) -> String {
    match &block.kind {
        BlockKind::Passthrough { raw } => raw.clone(),
        BlockKind::Cue {
            index_line,
            timing_line,
            text_lines,
        } => {
            let original_text = text_lines.join(" ");

            let text = match provider
                .translate(source_language, target_language, &original_text)
                .await
            {
                Ok(translated) => translated,
                Err(e) => {
                    warn!("Block {} failed: {}", index_line, e);
                    original_text
                }
            };

            let mut lines = vec![index_line.clone(), timing_line.clone()];
            lines.extend(wrap_sentences(&text));
            lines.join("\n")
        }
    }
}
