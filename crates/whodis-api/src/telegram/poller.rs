//! Long-polling update loop.
//!
//! Polls `getUpdates` until shutdown, spawning one task per update so
//! distinct sessions never block each other; the per-key lock in the
//! engine serializes same-key commands.

use std::time::Duration;

use tracing::{error, info};

use super::dispatch;
use crate::state::AppState;

/// Run the polling loop until Ctrl+C/SIGTERM.
pub async fn run(state: AppState) -> anyhow::Result<()> {
    // Polling and webhook delivery are mutually exclusive on the Bot API.
    state.telegram.delete_webhook().await?;

    let timeout = state.config.telegram.poll_timeout_secs;
    let mut offset = 0i64;

    loop {
        let updates = tokio::select! {
            _ = crate::shutdown_signal() => {
                info!("shutting down");
                return Ok(());
            }
            result = state.telegram.get_updates(offset, timeout) => match result {
                Ok(updates) => updates,
                Err(err) => {
                    error!(error = %err, "getUpdates failed, backing off");
                    tokio::time::sleep(Duration::from_secs(3)).await;
                    continue;
                }
            },
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);
            let Some(message) = update.message else {
                continue;
            };

            let state = state.clone();
            tokio::spawn(async move {
                if let Err(err) = dispatch::handle_message(&state, &message).await {
                    error!(chat_id = message.chat.id, error = %err, "update handling failed");
                }
            });
        }
    }
}
