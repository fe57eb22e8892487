//! Whodis CLI entry point.
//!
//! Binary name: `whodis`
//!
//! Parses CLI arguments, loads configuration and the roster, wires the
//! game service, then either starts the Telegram transport (webhook or
//! long polling) or runs a utility command.

mod cli;
mod state;
mod telegram;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, RosterCommand};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,whodis=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "whodis", &mut std::io::stdout());
        return Ok(());
    }

    match cli.command {
        Commands::Serve => {
            let state = AppState::init(&cli.config).await?;
            telegram::run(state).await?;
        }

        Commands::Roster { command } => match command {
            RosterCommand::Check => {
                let config = whodis_infra::config::load_config(&cli.config).await?;
                cli::roster::check(std::path::Path::new(&config.roster_path)).await?;
            }
        },

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
pub(crate) async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
