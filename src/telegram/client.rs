use std::time::Duration;

use reqwest::Client;

use super::error::TelegramError;
use super::types::{ApiResponse, ChatId, SendMessageRequest};

pub const API_URL: &str = "https://api.telegram.org";

/// Delivers plain-text messages to one fixed chat.
#[allow(async_fn_in_trait)]
pub trait Notifier {
    fn chat_id(&self) -> &ChatId;

    /// Sends `text`; a failure comes back as data and is never raised further.
    async fn notify(&self, text: &str) -> Result<(), TelegramError>;
}

pub struct TelegramClient {
    token: String,
    chat_id: ChatId,
    client: Client,
    api_url: String,
}

impl TelegramClient {
    /// `api_url` is the Bot API root without the `/bot<token>` suffix.
    pub fn with_api_url(
        token: String,
        chat_id: ChatId,
        api_url: String,
        timeout: Duration,
    ) -> Result<Self, TelegramError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            token,
            chat_id,
            client,
            api_url,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.api_url.trim_end_matches('/'),
            self.token,
            method
        )
    }
}

impl Notifier for TelegramClient {
    fn chat_id(&self) -> &ChatId {
        &self.chat_id
    }

    async fn notify(&self, text: &str) -> Result<(), TelegramError> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<ApiResponse>(&body).ok();

        if status.is_success() && parsed.as_ref().is_none_or(|r| r.ok) {
            return Ok(());
        }

        let description = parsed
            .and_then(|r| r.description)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
        Err(TelegramError::Api {
            status: status.as_u16(),
            description,
        })
    }
}
