// ABOUTME: CLI argument parsing and command routing for crawl-wizard
//
// - No command / tui: launches the TUI
// - defaults: prints the configuration a fresh wizard starts from

pub mod defaults;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Interactive wizard for configuring a website crawl
#[derive(Parser, Debug)]
#[command(name = "crawl-wizard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Path to the config file (default: <config dir>/crawl-wizard/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui {
        /// Start directly in the wizard instead of the launcher
        #[arg(long)]
        open: bool,
    },

    /// Print the default crawl configuration
    Defaults,
}
