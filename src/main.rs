mod config;
mod error;
mod logging;
mod poller;
mod practicum;
mod telegram;

use anyhow::Result;
use chrono::Utc;
use tracing::error;

use config::BotConfig;
use poller::Poller;
use practicum::PracticumClient;
use telegram::TelegramClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = BotConfig::load()?;
    logging::init(&config.log_file, &config.log_level)?;

    let Some(credentials) = config.credentials() else {
        error!(
            "Ошибка при загрузке переменных окружения ({}). Программа принудительно остановлена",
            config.missing_credentials().join(", ")
        );
        std::process::exit(-1);
    };

    let source = PracticumClient::with_endpoint(
        credentials.practicum_token,
        config.endpoint.clone(),
        config.request_timeout(),
    )?;
    let notifier = TelegramClient::with_api_url(
        credentials.telegram_token,
        credentials.telegram_chat_id,
        config.telegram_api_url.clone(),
        config.request_timeout(),
    )?;

    Poller::new(source, notifier, config.retry_time(), Utc::now().timestamp())
        .run()
        .await;
    Ok(())
}
