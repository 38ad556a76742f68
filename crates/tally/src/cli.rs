//! Command-line interface for the `tally` binary.
//!
//! Defines the CLI contract with clap derive macros.
//!
//! # Examples
//!
//! ```bash
//! # Run with defaults
//! tally
//!
//! # Spanish title, light theme, custom bounds
//! tally --locale es --theme light --min 0 --max 25
//!
//! # Print the widget descriptor for host tooling
//! tally describe
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// A bounded counter widget for the terminal.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tally",
    author,
    version,
    about = "A bounded counter widget for the terminal"
)]
pub struct Cli {
    /// Theme preset (dark, light)
    #[arg(long, short = 't', default_value = "dark", env = "TALLY_THEME")]
    pub theme: String,

    /// Path to a custom theme JSON file
    ///
    /// Overrides --theme if specified
    #[arg(long, env = "TALLY_THEME_FILE")]
    pub theme_file: Option<PathBuf>,

    /// Locale for the widget title (ar, es, hi, zh; anything else falls
    /// back to English)
    #[arg(long, short = 'l', default_value = "en", env = "TALLY_LOCALE")]
    pub locale: String,

    /// Base directory for locale resource files
    #[arg(long, env = "TALLY_LOCALES_DIR")]
    pub locales_dir: Option<PathBuf>,

    /// Inclusive lower bound
    #[arg(long, default_value_t = -15, allow_hyphen_values = true)]
    pub min: i64,

    /// Inclusive upper bound
    #[arg(long, default_value_t = 15)]
    pub max: i64,

    /// Initial count
    #[arg(long, short = 'c', default_value_t = 0, allow_hyphen_values = true)]
    pub count: i64,

    /// Disable the celebration animation
    ///
    /// Animations are also disabled when REDUCE_MOTION is set
    #[arg(long)]
    pub no_animations: bool,

    /// Force color output off
    ///
    /// Respects the NO_COLOR environment variable convention
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Seed for deterministic celebration bursts
    #[arg(long, short = 's', env = "TALLY_SEED")]
    pub seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the widget's property descriptor as JSON and exit
    Describe,
}
