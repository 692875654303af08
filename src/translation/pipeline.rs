/*!
 * Sequential chunk-by-chunk document translation pipeline.
 *
 * The pipeline splits a document once, then translates the chunks strictly
 * in document order, one outstanding request at a time, yielding each result
 * as soon as its service call completes. Consumers drive the stream and own
 * accumulation and persistence, so a run interrupted mid-document keeps
 * everything translated so far.
 */

use futures::stream::{self, Stream};

use crate::app_config::Config;
use crate::errors::TranslationError;
use crate::providers::Provider;
use crate::providers::ollama::{GenerationRequest, GenerationResponse, Ollama};
use crate::text_splitter::RecursiveTextSplitter;
use crate::translation::core::ChunkTranslator;

/// One completed chunk translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkTranslation {
    /// Zero-based position of the chunk in the document
    pub index: usize,
    /// Total number of chunks in the document
    pub total: usize,
    /// Translated chunk text
    pub text: String,
}

/// Document translation pipeline: splitter plus chunk translator.
#[derive(Debug)]
pub struct DocumentPipeline<P = Ollama>
where
    P: Provider<Request = GenerationRequest, Response = GenerationResponse>,
{
    translator: ChunkTranslator<P>,
    splitter: RecursiveTextSplitter,
}

impl DocumentPipeline<Ollama> {
    /// Create a pipeline backed by the configured Ollama endpoint.
    pub fn new(config: Config) -> Self {
        let translator = ChunkTranslator::new(config);
        Self::with_translator(translator)
    }
}

impl<P> DocumentPipeline<P>
where
    P: Provider<Request = GenerationRequest, Response = GenerationResponse>,
{
    /// Create a pipeline over an existing chunk translator.
    pub fn with_translator(translator: ChunkTranslator<P>) -> Self {
        let config = translator.config();
        let splitter = RecursiveTextSplitter::new(config.chunk_size, config.chunk_overlap);
        Self {
            translator,
            splitter,
        }
    }

    /// Split a document into chunks without translating it.
    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.splitter.split_text(text)
    }

    /// Translate a whole document as a lazy stream of per-chunk results.
    ///
    /// Each item carries the chunk's zero-based index, the total chunk
    /// count, and the translated text, and is yielded before the next
    /// service call starts. Dropping the stream stops the traversal; a new
    /// call starts over from the first chunk. On a chunk failure the stream
    /// ends with that error, and everything yielded before it stays valid.
    pub fn translate_document<'a>(
        &'a self,
        text: &str,
    ) -> impl Stream<Item = Result<ChunkTranslation, TranslationError>> + 'a {
        let chunks = self.splitter.split_text(text);
        let total = chunks.len();

        stream::try_unfold(
            chunks.into_iter().enumerate(),
            move |mut remaining| async move {
                let Some((index, chunk)) = remaining.next() else {
                    return Ok(None);
                };
                let text = self.translator.translate_chunk(&chunk).await?;
                Ok(Some((ChunkTranslation { index, total, text }, remaining)))
            },
        )
    }
}
