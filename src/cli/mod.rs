// ABOUTME: CLI argument parsing and command routing for seller-onboard
//
// Provides command-line interface for:
// - Running the registration wizard (tui, default)
// - Scoring a password the way the credentials step does (score)
// - Listing the wizard steps and shipping regions (steps, regions)

pub mod catalog;
pub mod score;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Seller onboarding wizard for the marketplace
#[derive(Parser)]
#[command(name = "seller-onboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to ~/.seller-onboarding/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the registration wizard (default if no command given)
    Tui,

    /// Score a password and print its strength band
    Score(ScoreArgs),

    /// List the wizard steps
    Steps,

    /// List the shipping regions offered by the wizard
    Regions,
}

/// Arguments for the score command
#[derive(clap::Args)]
pub struct ScoreArgs {
    /// Password to score
    pub password: String,
}
