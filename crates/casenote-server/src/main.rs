//! Casenote server binary
//!
//! Loads configuration, builds the extraction pipeline, and serves the HTTP
//! API. Run with `--config <path>` or fall back to a local test configuration.

use casenote_server::{start_server, ServerConfig};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        match ServerConfig::from_file(&args[2]) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                process::exit(1);
            }
        }
    } else if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_help();
        return;
    } else {
        eprintln!("Warning: No config file specified, using default test configuration");
        eprintln!("Use --config <path> to specify a configuration file");
        ServerConfig::default_test_config()
    };

    if let Err(e) = start_server(config).await {
        eprintln!("Server error: {}", e);
        process::exit(1);
    }
}

fn print_help() {
    println!("Casenote Server - Judgment extraction over HTTP");
    println!();
    println!("USAGE:");
    println!("    casenote-server [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --config <PATH>    Path to a TOML configuration file");
    println!("    --help, -h         Print this help message");
    println!();
    println!("CONFIG FILE FORMAT:");
    println!("    bind_address = \"127.0.0.1\"");
    println!("    bind_port = 8080");
    println!();
    println!("    [model]");
    println!("    provider = \"ollama\"    # ollama, openai, or mock");
    println!("    model = \"llama3\"");
    println!("    endpoint = \"http://localhost:11434\"");
    println!();
    println!("    [extractor]");
    println!("    min_chunk_words = 3000");
    println!("    max_chunk_words = 3500");
    println!("    extraction_timeout_secs = 120");
}
