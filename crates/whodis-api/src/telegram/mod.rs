//! Telegram transport: Bot API bindings, command routing, and the two
//! delivery modes (long polling and webhook).

pub mod client;
pub mod commands;
pub mod dispatch;
pub mod poller;
pub mod types;
pub mod webhook;

use crate::state::AppState;

/// Start the transport in the configured mode.
///
/// Registers the command menu first so Telegram clients show completions,
/// then hands off to webhook or polling delivery.
pub async fn run(state: AppState) -> anyhow::Result<()> {
    state
        .telegram
        .set_my_commands(&commands::command_menu())
        .await?;

    match state.config.telegram.webhook_url.clone() {
        Some(url) => {
            println!(
                "  {} Starting bot using webhook at {}",
                console::style("🔗").bold(),
                console::style(&url).cyan()
            );
            webhook::serve(state, &url).await
        }
        None => {
            println!(
                "  {} Starting bot using polling...",
                console::style("🤖").bold()
            );
            poller::run(state).await
        }
    }
}
