//! Update-to-handler routing.

use tracing::info;

use super::commands::{self, Command};
use super::types::Message;
use crate::state::AppState;

/// Handle one incoming message end to end: parse the command, run the
/// matching game handler, send the replies in order.
///
/// Non-command messages and unknown commands are ignored silently, like
/// any chat bot sharing a group with humans should.
pub async fn handle_message(state: &AppState, message: &Message) -> anyhow::Result<()> {
    let Some(text) = message.text.as_deref() else {
        return Ok(());
    };
    let Some((command, args)) = commands::parse(text) else {
        return Ok(());
    };

    let key = message.session_key();
    let sender = message
        .from
        .as_ref()
        .and_then(|user| user.username.as_deref())
        .unwrap_or("-");
    info!(
        session_key = %key,
        ?command,
        message_id = message.message_id,
        sender,
        "command received"
    );

    let replies = match command {
        Command::Start => state.game.start(key).await,
        Command::Ask => state.game.ask(key, args).await,
        Command::Guess => state.game.guess(key, args).await,
        Command::Namelist => state.game.namelist(key).await,
        Command::Next => state.game.next_page(key).await,
        Command::History => state.game.history(key).await,
        Command::Scorecard => state.game.scorecard(key).await,
        Command::End => state.game.end(key).await,
        Command::Summary => state.game.summary(key).await,
        Command::Help => state.game.help(),
    };

    for reply in replies {
        state
            .telegram
            .send_message(message.chat.id, &reply.text, reply.markdown)
            .await?;
    }
    Ok(())
}
