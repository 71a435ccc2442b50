// ABOUTME: Entry point for the launchpad CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use launchpad::error::Result;
use launchpad::output::Output;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = cli.output_mode();

    if let Err(e) = run(cli, Output::new(mode)).await {
        Output::new(mode).error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: Output) -> Result<()> {
    match cli.command {
        Commands::Deploy { name, config } => {
            let cwd = env::current_dir()?;
            commands::deploy(&cwd, config.as_deref(), name.as_deref(), output).await
        }
        Commands::Init { name, force } => {
            let cwd = env::current_dir()?;
            commands::init(&cwd, name.as_deref(), force, &output)
        }
        Commands::Env => {
            commands::print_env(&output);
            Ok(())
        }
    }
}
