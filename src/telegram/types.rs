//! Telegram Bot API payloads used by the notifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target chat: a numeric id or a public `@username`.
///
/// Serialized untagged, so Telegram receives a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl ChatId {
    /// Parses a raw environment value; anything that is not an `i64` stays a string.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(id) => ChatId::Id(id),
            Err(_) => ChatId::Username(raw.trim().to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ChatId::Id(_) => false,
            ChatId::Username(name) => name.trim().is_empty(),
        }
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatId::Id(id) => write!(f, "{id}"),
            ChatId::Username(name) => write!(f, "{name}"),
        }
    }
}

/// Body of `sendMessage`.
#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a ChatId,
    pub text: &'a str,
}

/// Envelope every Bot API method answers with.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
}
