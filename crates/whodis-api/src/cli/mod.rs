//! CLI command definitions for the `whodis` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod roster;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Run the Whodis guessing-game Telegram bot.
#[derive(Parser)]
#[command(name = "whodis", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the bot (webhook mode when a webhook URL is configured,
    /// long polling otherwise).
    Serve,

    /// Roster utilities.
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum RosterCommand {
    /// Validate the roster file and report how many names it holds.
    Check,
}
