/*!
 * Parallel translation of caption blocks.
 *
 * - `translation::dispatch`: bounded-concurrency fan-out with ordered reassembly
 * - `translation::formatting`: sentence-boundary re-wrap of translated text
 */

pub mod dispatch;
pub mod formatting;

pub use dispatch::BlockDispatcher;
