//! Serde bindings for the slice of the Telegram Bot API the bot uses.

use serde::{Deserialize, Serialize};
use whodis_types::game::SessionKey;

/// An incoming update. Only message updates matter to the game; anything
/// else deserializes with `message: None` and is skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

/// An incoming chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    #[serde(default)]
    pub from: Option<User>,
    #[serde(default)]
    pub text: Option<String>,
}

impl Message {
    /// Session key for this message: the sender in private chats, the
    /// chat itself otherwise, so private games are per-player and group
    /// games are shared by the whole group.
    pub fn session_key(&self) -> SessionKey {
        if self.chat.kind == "private" {
            self.from
                .as_ref()
                .map_or(SessionKey(self.chat.id), |user| SessionKey(user.id))
        } else {
            SessionKey(self.chat.id)
        }
    }
}

/// The chat a message arrived in.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
    /// "private", "group", "supergroup", or "channel".
    #[serde(rename = "type")]
    pub kind: String,
}

/// The sender of a message.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
}

/// A command registered with `setMyCommands`.
#[derive(Debug, Clone, Serialize)]
pub struct BotCommand {
    pub command: &'static str,
    pub description: &'static str,
}

/// The Bot API response envelope.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_chat_keys_on_user() {
        let message = Message {
            message_id: 1,
            chat: Chat {
                id: -100,
                kind: "private".to_string(),
            },
            from: Some(User {
                id: 7,
                username: Some("alice".to_string()),
            }),
            text: Some("/start".to_string()),
        };
        assert_eq!(message.session_key(), SessionKey(7));
    }

    #[test]
    fn test_group_chat_keys_on_chat() {
        let message = Message {
            message_id: 1,
            chat: Chat {
                id: -100123,
                kind: "supergroup".to_string(),
            },
            from: Some(User {
                id: 7,
                username: None,
            }),
            text: Some("/start".to_string()),
        };
        assert_eq!(message.session_key(), SessionKey(-100123));
    }

    #[test]
    fn test_update_deserializes_from_bot_api_json() {
        let json = r#"{
            "update_id": 123456,
            "message": {
                "message_id": 99,
                "from": {"id": 42, "is_bot": false, "first_name": "A", "username": "alice"},
                "chat": {"id": 42, "type": "private", "first_name": "A"},
                "date": 1700000000,
                "text": "/ask Is it a man?"
            }
        }"#;
        let update: Update = serde_json::from_str(json).unwrap();
        assert_eq!(update.update_id, 123456);
        let message = update.message.unwrap();
        assert_eq!(message.text.as_deref(), Some("/ask Is it a man?"));
        assert_eq!(message.session_key(), SessionKey(42));
    }

    #[test]
    fn test_non_message_update_tolerated() {
        let json = r#"{"update_id": 5, "edited_message": {"message_id": 1}}"#;
        let update: Update = serde_json::from_str(json).unwrap();
        assert!(update.message.is_none());
    }

    #[test]
    fn test_api_response_envelope() {
        let json = r#"{"ok": false, "description": "Unauthorized"}"#;
        let resp: ApiResponse<bool> = serde_json::from_str(json).unwrap();
        assert!(!resp.ok);
        assert_eq!(resp.description.as_deref(), Some("Unauthorized"));
        assert!(resp.result.is_none());
    }
}
