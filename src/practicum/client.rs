use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use super::error::PracticumError;

pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Source of homework status updates.
#[allow(async_fn_in_trait)]
pub trait StatusSource {
    /// Fetches every status change that happened after `from_date` (Unix seconds).
    async fn fetch_updates(&self, from_date: i64) -> Result<Value, PracticumError>;
}

pub struct PracticumClient {
    token: String,
    client: Client,
    endpoint: String,
}

impl PracticumClient {
    /// The endpoint normally comes from [`BotConfig::endpoint`](crate::config::BotConfig),
    /// which defaults to [`ENDPOINT`]; tests point it at a mock server.
    pub fn with_endpoint(
        token: String,
        endpoint: String,
        timeout: Duration,
    ) -> Result<Self, PracticumError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            token,
            client,
            endpoint,
        })
    }
}

impl StatusSource for PracticumClient {
    async fn fetch_updates(&self, from_date: i64) -> Result<Value, PracticumError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PracticumError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| PracticumError::Format(format!("Ответ API не является JSON: {e}")))
    }
}
