use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::practicum::{
    Homework, PracticumError, StatusSource, current_date, describe_status, validate_response,
};
use crate::telegram::Notifier;

const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Mutable cursor carried between iterations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// `from_date` for the next request, Unix seconds.
    pub timestamp: i64,
    /// Last failure text relayed to the chat.
    pub last_sent_error: String,
}

impl PollState {
    pub fn starting_at(timestamp: i64) -> Self {
        Self {
            timestamp,
            last_sent_error: String::new(),
        }
    }
}

/// Drives the fetch → validate → notify → sleep loop.
///
/// Owns both clients and the cursor, so nothing lives in globals.
pub struct Poller<S, N> {
    source: S,
    notifier: N,
    retry_time: Duration,
    state: PollState,
}

impl<S: StatusSource, N: Notifier> Poller<S, N> {
    pub fn new(source: S, notifier: N, retry_time: Duration, timestamp: i64) -> Self {
        Self {
            source,
            notifier,
            retry_time,
            state: PollState::starting_at(timestamp),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Polls forever, sleeping `retry_time` after every iteration.
    pub async fn run(mut self) {
        info!(
            "Бот запущен: опрос каждые {} с, чат {}",
            self.retry_time.as_secs(),
            self.notifier.chat_id()
        );
        loop {
            self.tick().await;
            sleep(self.retry_time).await;
        }
    }

    /// One iteration. Failures are logged and relayed once per distinct text.
    pub async fn tick(&mut self) {
        let Err(err) = self.poll_once().await else {
            return;
        };

        let message = format!("{FAILURE_PREFIX}: {err}");
        if message != self.state.last_sent_error {
            self.send(&message).await;
            self.state.last_sent_error = message.clone();
        }
        error!("{message}");
    }

    /// Fetches updates since the cursor, reports the most recent status
    /// change and moves the cursor to the server's `current_date`.
    pub async fn poll_once(&mut self) -> Result<(), PracticumError> {
        let response = self.source.fetch_updates(self.state.timestamp).await?;
        let homeworks = validate_response(&response)?;
        let next_timestamp = current_date(&response);

        match homeworks.first() {
            Some(latest) => {
                let homework = Homework::from_value(latest)?;
                let message = describe_status(&homework)?;
                self.send(&message).await;
            }
            None => debug!("Новых статусов нет"),
        }

        match next_timestamp {
            Some(timestamp) => self.state.timestamp = timestamp,
            None => warn!(
                "В ответе API нет current_date, курсор остаётся {}",
                self.state.timestamp
            ),
        }
        Ok(())
    }

    async fn send(&self, message: &str) {
        let chat = self.notifier.chat_id();
        match self.notifier.notify(message).await {
            Ok(()) => info!("Отправлено сообщение для id {chat}"),
            Err(e) => error!("Ошибка при отправке сообщения для id {chat} ({e})"),
        }
    }
}
