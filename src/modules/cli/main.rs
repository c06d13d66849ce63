//! mongohook CLI
//!
//! Command-line interface for inspecting and testing MongoDB connection profiles.

use clap::Parser;
use mongohook_cli::{Cli, Commands};
use mongohook_core::MongoHookError;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Connection failures go through the log; usage problems are plain stderr
        if e.is_error() {
            tracing::error!("{}", e.sanitized_message());
        } else {
            eprintln!("Error: {}", e.sanitized_message());
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<(), MongoHookError> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Commands::Completion(cmd) = &cli.command {
        return cmd.execute();
    }

    let registry = mongohook_parser::load_registry(&cli.file)?;

    match cli.command {
        Commands::Uri(cmd) => cmd.execute(&registry)?,
        Commands::Ping(cmd) => cmd.execute(&registry).await?,
        Commands::List(cmd) => cmd.execute(&registry)?,
        Commands::Completion(_) => {}
    }

    Ok(())
}
