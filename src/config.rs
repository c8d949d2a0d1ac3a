//! Конфигурация бота, загружаемая из `homework_bot.toml` и окружения.
//!
//! Структура [`BotConfig`] содержит все настраиваемые параметры.
//! Значения, отсутствующие в файле, берутся по умолчанию.
//! Переменные окружения `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN` и
//! `TELEGRAM_CHAT_ID` имеют приоритет над файлом.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::BotError;
use crate::practicum::client::ENDPOINT;
use crate::telegram::ChatId;
use crate::telegram::client::API_URL;

pub const CONFIG_FILE: &str = "homework_bot.toml";

pub const ENV_PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const ENV_TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const ENV_TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Конфигурация верхнего уровня.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// OAuth-токен API Практикума.
    #[serde(default)]
    pub practicum_token: Option<String>,

    /// Токен Telegram-бота.
    #[serde(default)]
    pub telegram_token: Option<String>,

    /// Чат, куда уходят уведомления (число или `@username`).
    #[serde(default)]
    pub telegram_chat_id: Option<ChatId>,

    /// Эндпоинт статусов домашних работ.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Корень Bot API.
    #[serde(default = "default_telegram_api_url")]
    pub telegram_api_url: String,

    /// Пауза между итерациями опроса, в секундах.
    #[serde(default = "default_retry_time_secs")]
    pub retry_time_secs: u64,

    /// Предельное время одного HTTP-запроса, в секундах.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Файл журнала (дописывается).
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// Фильтр уровня журнала в синтаксисе `EnvFilter`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Набор учётных данных, проверенный на полноту.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: ChatId,
}

fn default_endpoint() -> String {
    ENDPOINT.to_string()
}

fn default_telegram_api_url() -> String {
    API_URL.to_string()
}

// Десять минут между запросами.
fn default_retry_time_secs() -> u64 {
    600
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_file() -> String {
    "main.log".to_string()
}

// Only the bot's own events; reqwest and hyper stay quiet.
fn default_log_level() -> String {
    "homework_bot=debug".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            practicum_token: None,
            telegram_token: None,
            telegram_chat_id: None,
            endpoint: default_endpoint(),
            telegram_api_url: default_telegram_api_url(),
            retry_time_secs: default_retry_time_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}

impl BotConfig {
    /// Загружает `homework_bot.toml` из текущего каталога и накладывает
    /// переменные окружения. Без файла используются значения по умолчанию.
    pub fn load() -> Result<Self, BotError> {
        let mut config = Self::from_file(Path::new(CONFIG_FILE))?;
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, BotError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str::<BotConfig>(&contents)?)
    }

    /// Непустые значения из `lookup` заменяют значения из файла.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(token) = non_empty(ENV_PRACTICUM_TOKEN) {
            self.practicum_token = Some(token);
        }
        if let Some(token) = non_empty(ENV_TELEGRAM_TOKEN) {
            self.telegram_token = Some(token);
        }
        if let Some(chat) = non_empty(ENV_TELEGRAM_CHAT_ID) {
            self.telegram_chat_id = Some(ChatId::parse(&chat));
        }
    }

    /// Имена отсутствующих или пустых учётных данных.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let blank = |v: &Option<String>| v.as_deref().is_none_or(|s| s.trim().is_empty());

        let mut missing = Vec::new();
        if blank(&self.practicum_token) {
            missing.push(ENV_PRACTICUM_TOKEN);
        }
        if blank(&self.telegram_token) {
            missing.push(ENV_TELEGRAM_TOKEN);
        }
        if self.telegram_chat_id.as_ref().is_none_or(ChatId::is_empty) {
            missing.push(ENV_TELEGRAM_CHAT_ID);
        }
        missing
    }

    /// Возвращает учётные данные, только если присутствуют все три.
    pub fn credentials(&self) -> Option<Credentials> {
        if !self.missing_credentials().is_empty() {
            return None;
        }
        Some(Credentials {
            practicum_token: self.practicum_token.clone()?,
            telegram_token: self.telegram_token.clone()?,
            telegram_chat_id: self.telegram_chat_id.clone()?,
        })
    }

    pub fn retry_time(&self) -> Duration {
        Duration::from_secs(self.retry_time_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
