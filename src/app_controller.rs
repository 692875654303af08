/*!
 * Application controller for document translation runs.
 *
 * The controller owns everything around the pipeline: reading the input,
 * progress display, joining the translated chunks, and writing the output.
 * It also turns Ctrl-C into a clean stop that persists whatever has been
 * translated so far.
 */

use anyhow::{Context, Result, anyhow};
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::TranslationError;
use crate::file_utils::FileManager;
use crate::translation::pipeline::DocumentPipeline;

/// Joined between translated chunks in the output document.
const CHUNK_JOINER: &str = "\n\n";

/// How one translation run ended.
enum RunOutcome {
    /// Every chunk translated
    Completed,
    /// Stopped by the user between chunks
    Cancelled,
    /// A chunk translation failed
    Failed(TranslationError),
}

/// Main application controller
pub struct Controller {
    /// Validated run configuration
    config: Config,
}

impl Controller {
    /// Create a new controller with the provided configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config
            .validate()
            .context("Configuration validation failed")?;
        Ok(Controller { config })
    }

    /// Translate a single document file.
    ///
    /// When `output_file` is `None` the output lands next to the input as
    /// `<stem>.<target_code>.<ext>`. Existing outputs are kept unless
    /// `force_overwrite` is set.
    pub async fn run(
        &self,
        input_file: PathBuf,
        output_file: Option<PathBuf>,
        force_overwrite: bool,
    ) -> Result<()> {
        if !FileManager::file_exists(&input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_file = output_file.unwrap_or_else(|| {
            FileManager::generate_output_path(
                &input_file,
                input_file.parent().unwrap_or(Path::new(".")),
                &self.config.target_code,
            )
        });

        if FileManager::file_exists(&output_file) && !force_overwrite {
            warn!(
                "Output file already exists: {:?}. Use -f to force overwrite.",
                output_file
            );
            return Ok(());
        }

        let text = FileManager::read_to_string(&input_file)?;
        if text.trim().is_empty() {
            warn!("Input file is empty: {:?}", input_file);
            return Ok(());
        }

        info!(
            "Translating {:?}: {} ({}) -> {} ({})",
            input_file,
            self.config.source_lang,
            self.config.source_code,
            self.config.target_lang,
            self.config.target_code
        );
        info!("Model: {} at {}", self.config.model, self.config.endpoint);

        let pipeline = DocumentPipeline::new(self.config.clone());
        let total_chunks = pipeline.split_text(&text).len();
        info!("Document split into {} chunk(s)", total_chunks);

        let progress_bar = ProgressBar::new(total_chunks as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style);

        let mut translated: Vec<String> = Vec::with_capacity(total_chunks);
        let stream = pipeline.translate_document(&text);
        futures::pin_mut!(stream);

        let outcome = loop {
            tokio::select! {
                biased;
                _ = tokio::signal::ctrl_c() => break RunOutcome::Cancelled,
                item = stream.next() => match item {
                    None => break RunOutcome::Completed,
                    Some(Ok(chunk)) => {
                        progress_bar.set_message(format!("Chunk {}/{}", chunk.index + 1, chunk.total));
                        progress_bar.inc(1);
                        translated.push(chunk.text);
                    }
                    Some(Err(err)) => break RunOutcome::Failed(err),
                }
            }
        };

        match outcome {
            RunOutcome::Completed => {
                progress_bar.finish_with_message("done");
                FileManager::write_to_file(&output_file, &translated.join(CHUNK_JOINER))?;
                info!("Translation complete: {:?}", output_file);
                Ok(())
            }
            RunOutcome::Cancelled => {
                progress_bar.abandon_with_message("cancelled");
                warn!("Translation cancelled by user");
                if !translated.is_empty() {
                    FileManager::write_to_file(&output_file, &translated.join(CHUNK_JOINER))?;
                    info!(
                        "Partial translation ({} of {} chunks) saved to {:?}",
                        translated.len(),
                        total_chunks,
                        output_file
                    );
                }
                Err(anyhow!("Translation cancelled by user"))
            }
            RunOutcome::Failed(err) => {
                progress_bar.abandon_with_message("failed");
                if err.is_service_unavailable() {
                    error!("{}", err);
                }
                Err(err).with_context(|| format!("Failed to translate {:?}", input_file))
            }
        }
    }

    /// Translate every text document under a directory.
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let files = FileManager::find_files(&input_dir, "txt")?;
        if files.is_empty() {
            warn!("No text documents found in {:?}", input_dir);
            return Ok(());
        }

        info!("Found {} document(s) in {:?}", files.len(), input_dir);

        let mut processed_count = 0;
        for file in files {
            self.run(file, None, force_overwrite).await?;
            processed_count += 1;
        }

        info!("Finished processing {} document(s)", processed_count);
        Ok(())
    }
}
