// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use launchpad::output::OutputMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "launchpad")]
#[command(about = "Build, push, and register container deployments from CI")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print only final results
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Print results as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build and push the image, then register the deployment
    Deploy {
        /// Application name (overrides config)
        #[arg(short, long)]
        name: Option<String>,

        /// Path to the config file (default: discovered in the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Create a launchpad.yml configuration file
    Init {
        /// Application name
        #[arg(short, long)]
        name: Option<String>,

        /// Overwrite an existing launchpad.yml
        #[arg(short, long)]
        force: bool,
    },

    /// Print LP_ENV_ variables as a comma-separated KEY=value list
    Env,
}
