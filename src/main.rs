use clap::Parser;
use colored::*;
use datasets_digest::cli::{Cli, Commands};
use datasets_digest::core::config;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Config 2, I/O 3, malformed document 4, unusable input path 5
        let exit_code = match e.downcast_ref::<datasets_digest::DigestError>() {
            Some(datasets_digest::DigestError::Config(_)) => 2,
            Some(datasets_digest::DigestError::Io(_)) => 3,
            Some(datasets_digest::DigestError::Parse { .. }) => 4,
            Some(datasets_digest::DigestError::InvalidInput(_)) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

/// RUST_LOG wins; otherwise DATASETS_DIGEST_LOG (default "info"), raised by -v / -vv
fn init_logging(verbose: u8) {
    let base_level = std::env::var("DATASETS_DIGEST_LOG").unwrap_or_else(|_| "info".to_string());
    let level = match verbose {
        0 => base_level,
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level)))
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Taxa(args) => datasets_digest::cli::commands::taxa::run(args, &config),
        Commands::Ranks(args) => datasets_digest::cli::commands::ranks::run(args, &config),
        Commands::Transcripts(args) => {
            datasets_digest::cli::commands::transcripts::run(args, &config)
        }
    }
}
