/*!
 * AI-powered document translation.
 *
 * The translation path is organized in three layers:
 * - `translation::prompts`: the prompt template sent to the model
 * - `translation::core`: single-chunk translation against a provider
 * - `translation::pipeline`: sequential chunk-by-chunk document pipeline
 */

pub mod core;
pub mod pipeline;
pub mod prompts;

pub use self::core::ChunkTranslator;
pub use self::pipeline::{ChunkTranslation, DocumentPipeline};
pub use self::prompts::PromptTemplate;
