// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use crate::app_config::{Config, LogLevel};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod language_utils;
mod providers;
mod text_splitter;
mod translation;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a text document using the configured local model (default command)
    #[command(alias = "translate")]
    Translate(TranslateArgs),

    /// Generate shell completions for doctwai
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input text file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output file path (defaults to the input name with a language suffix)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Base URL of the model service
    #[arg(long)]
    endpoint: Option<String>,

    /// Source language name (e.g., 'English')
    #[arg(short = 's', long)]
    source_lang: Option<String>,

    /// Source language ISO code (e.g., 'en')
    #[arg(long)]
    source_code: Option<String>,

    /// Target language name (e.g., 'Spanish')
    #[arg(short = 't', long)]
    target_lang: Option<String>,

    /// Target language ISO code (e.g., 'es')
    #[arg(long)]
    target_code: Option<String>,

    /// Characters per text chunk
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Overlap characters between chunks
    #[arg(long)]
    chunk_overlap: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// doctwai - Document Translator with AI
///
/// Translates large text documents with a local LLM served by Ollama,
/// chunk by chunk, with resumable partial output.
#[derive(Parser, Debug)]
#[command(name = "doctwai")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered document translation tool")]
#[command(long_about = "doctwai splits a text document into chunks and translates them one by one
using a local LLM served by Ollama.

EXAMPLES:
    doctwai book.txt                            # Translate using default config
    doctwai -f book.txt                         # Force overwrite existing output
    doctwai -m translategemma:12b book.txt      # Use a specific model
    doctwai --source-code en --target-code fr book.txt
    doctwai -o book_fr.txt book.txt             # Explicit output path
    doctwai --chunk-size 500 book.txt           # Smaller chunks
    doctwai --log-level debug /documents/       # Process a directory of .txt files
    doctwai completions bash > doctwai.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default (falling back to
    ~/.doctwai.json when present). You can specify a different file with
    --config. If the config file doesn't exist, a default one will be
    created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input text file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output file path (defaults to the input name with a language suffix)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Base URL of the model service
    #[arg(long)]
    endpoint: Option<String>,

    /// Source language name (e.g., 'English')
    #[arg(short = 's', long)]
    source_lang: Option<String>,

    /// Source language ISO code (e.g., 'en')
    #[arg(long)]
    source_code: Option<String>,

    /// Target language name (e.g., 'Spanish')
    #[arg(short = 't', long)]
    target_lang: Option<String>,

    /// Target language ISO code (e.g., 'es')
    #[arg(long)]
    target_code: Option<String>,

    /// Characters per text chunk
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Overlap characters between chunks
    #[arg(long)]
    chunk_overlap: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "doctwai", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let translate_args = TranslateArgs {
                input_path,
                output: cli.output,
                force_overwrite: cli.force_overwrite,
                model: cli.model,
                endpoint: cli.endpoint,
                source_lang: cli.source_lang,
                source_code: cli.source_code,
                target_lang: cli.target_lang,
                target_code: cli.target_code,
                chunk_size: cli.chunk_size,
                chunk_overlap: cli.chunk_overlap,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_translate(translate_args).await
        }
    }
}

/// Resolve the configuration file path, falling back to the per-user config
/// when the default working-directory file does not exist.
fn resolve_config_path(cli_path: &str) -> PathBuf {
    let path = PathBuf::from(cli_path);
    if path.exists() || cli_path != "conf.json" {
        return path;
    }

    dirs::home_dir()
        .map(|home| home.join(".doctwai.json"))
        .filter(|candidate| candidate.exists())
        .unwrap_or(path)
}

/// Load the configuration file (creating a default one when missing) and
/// apply CLI overrides on top.
fn load_config(options: &TranslateArgs) -> Result<Config> {
    let config_path = resolve_config_path(&options.config_path);

    let mut config: Config = if config_path.exists() {
        let file = File::open(&config_path)
            .with_context(|| format!("Failed to open config file: {:?}", config_path))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?
    } else {
        warn!(
            "Config file not found at {:?}, creating default config.",
            config_path
        );
        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(&config_path, config_json)
            .with_context(|| format!("Failed to write default config to file: {:?}", config_path))?;
        config
    };

    // Override config with CLI options if provided
    if let Some(model) = &options.model {
        config.model = model.clone();
    }
    if let Some(endpoint) = &options.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(source_lang) = &options.source_lang {
        config.source_lang = source_lang.clone();
    }
    if let Some(source_code) = &options.source_code {
        config.source_code = source_code.clone();
    }
    if let Some(target_lang) = &options.target_lang {
        config.target_lang = target_lang.clone();
    }
    if let Some(target_code) = &options.target_code {
        config.target_code = target_code.clone();
    }
    if let Some(chunk_size) = options.chunk_size {
        config.chunk_size = chunk_size;
    }
    if let Some(chunk_overlap) = options.chunk_overlap {
        config.chunk_overlap = chunk_overlap;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // When only a code was given, derive the display name from it
    if options.source_code.is_some() && options.source_lang.is_none() {
        if let Ok(name) = language_utils::get_language_name(&config.source_code) {
            config.source_lang = name;
        }
    }
    if options.target_code.is_some() && options.target_lang.is_none() {
        if let Ok(name) = language_utils::get_language_name(&config.target_code) {
            config.target_lang = name;
        }
    }

    Ok(config)
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    let config = load_config(&options)?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller; configuration is validated here, before any
    // translation starts
    let controller = Controller::with_config(config)?;

    if options.input_path.is_file() {
        controller
            .run(options.input_path.clone(), options.output.clone(), options.force_overwrite)
            .await
    } else if options.input_path.is_dir() {
        if options.output.is_some() {
            warn!("--output is ignored when translating a directory");
        }
        controller
            .run_folder(options.input_path.clone(), options.force_overwrite)
            .await
    } else {
        Err(anyhow!("Input path does not exist: {:?}", options.input_path))
    }
}
