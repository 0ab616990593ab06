/*!
 * # srtran - parallel SRT subtitle translator
 *
 * A Rust library for translating SRT subtitle files through a remote
 * translation service.
 *
 * ## Features
 *
 * - Parse SRT documents into caption blocks, passing malformed chunks
 *   through verbatim
 * - Translate blocks concurrently with a bounded worker pool
 * - Preserve block order and timing lines exactly
 * - Degrade a failed block to its original text instead of aborting the run
 * - Re-wrap translated text one sentence per line
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Run configuration
 * - `subtitle_processor`: Caption block parsing and serialization
 * - `translation`: Parallel dispatch and text formatting:
 *   - `translation::dispatch`: Bounded-concurrency fan-out with ordered reassembly
 *   - `translation::formatting`: Sentence-boundary re-wrap
 * - `providers`: Translation service clients:
 *   - `providers::google`: Google Translate web-endpoint client
 *   - `providers::mock`: Configurable test double
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod subtitle_processor;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::RunConfig;
pub use errors::ProviderError;
pub use providers::Translator;
pub use subtitle_processor::{BlockKind, CaptionBlock, parse_blocks, serialize_blocks};
pub use translation::BlockDispatcher;
