//! Casenote CLI - Extract structured case notes from court judgments.

use casenote_cli::{commands, Cli, CliError, Command, Config, Formatter};
use casenote_extractor::JudgmentExtractor;
use casenote_llm::LlmClient;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Pipeline logs stay quiet unless RUST_LOG asks for them.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load or create config
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|_| {
            let cfg = Config::default();
            cfg.save().ok();
            cfg
        }),
    };

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Process(args) => {
            config.apply_overrides(&args.overrides);
            config.validate()?;
            let extractor = build_extractor(&config)?;
            commands::execute_process(args, &extractor, &formatter).await?;
        }
        Command::Batch(args) => {
            config.apply_overrides(&args.overrides);
            config.validate()?;
            let extractor = build_extractor(&config)?;
            commands::execute_batch(args, &extractor, &formatter).await?;
        }
    }

    Ok(())
}

fn build_extractor(config: &Config) -> Result<JudgmentExtractor<LlmClient>, CliError> {
    let client = config.model.build()?;
    Ok(JudgmentExtractor::new(client, config.extractor.clone())
        .with_model_name(config.model.model_name()))
}
