/*!
 * Prompt template for document chunk translation.
 */

use crate::app_config::Config;

/// Prompt template for document translation.
///
/// The rendered prompt instructs the model to act as a translator between
/// the configured language pair and to answer with the translation only.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// The default prompt for document chunk translation.
    ///
    /// The two blank lines between the instruction and the chunk text are a
    /// protocol requirement of the TranslateGemma model family and must be
    /// kept exactly as written.
    pub const DOCUMENT_TRANSLATOR: &'static str = r#"You are a professional {source_lang} ({source_code}) to {target_lang} ({target_code}) translator. Your goal is to accurately convey the meaning and nuances of the original {source_lang} text while adhering to {target_lang} grammar, vocabulary, and cultural sensitivities.
Produce only the {target_lang} translation, without any additional explanations or commentary. Please translate the following {source_lang} text into {target_lang}:


{text}"#;

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the default document translator template.
    pub fn document_translator() -> Self {
        Self::new(Self::DOCUMENT_TRANSLATOR)
    }

    /// Render the template for one chunk.
    ///
    /// Language placeholders are substituted before the chunk text so that
    /// placeholder-looking sequences inside the document are left alone.
    pub fn render(&self, config: &Config, chunk_text: &str) -> String {
        self.template
            .replace("{source_lang}", &config.source_lang)
            .replace("{source_code}", &config.source_code)
            .replace("{target_lang}", &config.target_lang)
            .replace("{target_code}", &config.target_code)
            .replace("{text}", chunk_text)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::document_translator()
    }
}
