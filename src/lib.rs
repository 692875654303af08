/*!
 * # doctwai - Document Translator with AI
 *
 * A Rust library for translating large text documents with a local LLM
 * served by Ollama.
 *
 * ## Features
 *
 * - Recursive, separator-aware text chunking with optional overlap
 * - Sequential chunk-by-chunk translation with streaming progress
 * - Partial output recovery when a run is interrupted
 * - JSON configuration with CLI overrides
 * - ISO 639 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `text_splitter`: Recursive text chunking
 * - `translation`: Document translation:
 *   - `translation::prompts`: prompt template for the model
 *   - `translation::core`: single-chunk translation
 *   - `translation::pipeline`: sequential document pipeline
 * - `providers`: Client for the local LLM server
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod providers;
pub mod text_splitter;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ProviderError, TranslationError};
pub use text_splitter::RecursiveTextSplitter;
pub use translation::{ChunkTranslation, ChunkTranslator, DocumentPipeline, PromptTemplate};
