//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Casenote CLI - Extract structured case notes from court judgments.
#[derive(Debug, Parser)]
#[command(name = "casenote")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Summary table (default)
    Table,
    /// Full case note as JSON
    Json,
    /// Output path only
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process a single judgment file
    Process(ProcessArgs),

    /// Process a directory of judgment files
    Batch(BatchArgs),
}

/// Arguments for the process command.
#[derive(Debug, Parser)]
pub struct ProcessArgs {
    /// Path to the judgment text file
    pub file: String,

    /// Output path for the case note (defaults to the input path with a .json extension)
    #[arg(short, long)]
    pub output: Option<String>,

    #[command(flatten)]
    pub overrides: PipelineOverrides,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Directory containing judgment .txt files
    #[arg(short, long)]
    pub input_dir: String,

    /// Directory to write case notes into
    #[arg(short, long)]
    pub output_dir: String,

    /// Maximum number of files to process
    #[arg(long, default_value = "2")]
    pub max_files: usize,

    #[command(flatten)]
    pub overrides: PipelineOverrides,
}

/// Provider and chunking overrides shared by the processing commands.
#[derive(Debug, Default, Parser)]
pub struct PipelineOverrides {
    /// LLM backend to use
    #[arg(long, value_enum)]
    pub provider: Option<ProviderArg>,

    /// Model name override
    #[arg(short, long)]
    pub model: Option<String>,

    /// Provider endpoint or base URL override
    #[arg(long)]
    pub endpoint: Option<String>,

    /// API key for providers that require one
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Minimum words per chunk
    #[arg(long)]
    pub min_chunk_words: Option<usize>,

    /// Maximum words per chunk
    #[arg(long)]
    pub max_chunk_words: Option<usize>,

    /// Per-chunk extraction timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

/// Provider argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ProviderArg {
    /// Local Ollama instance
    Ollama,
    /// OpenAI chat completions API
    Openai,
    /// Canned-response backend for dry runs
    Mock,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<ProviderArg> for casenote_llm::ProviderKind {
    fn from(provider: ProviderArg) -> Self {
        match provider {
            ProviderArg::Ollama => casenote_llm::ProviderKind::Ollama,
            ProviderArg::Openai => casenote_llm::ProviderKind::OpenAi,
            ProviderArg::Mock => casenote_llm::ProviderKind::Mock,
        }
    }
}
