use thiserror::Error;

/// Failure to deliver a message through the Bot API.
///
/// Returned as a value from [`Notifier::notify`](super::Notifier::notify);
/// callers log it and carry on.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Bot API rejected the call (non-2xx status or `"ok": false`).
    #[error("Telegram API error (status {status}): {description}")]
    Api { status: u16, description: String },

    /// Transport failure before a response arrived.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
}

// The request URL embeds the bot token, so it never reaches the error text.
impl From<reqwest::Error> for TelegramError {
    fn from(err: reqwest::Error) -> Self {
        TelegramError::Network(err.without_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = TelegramError::Api {
            status: 400,
            description: "Bad Request: chat not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "Telegram API error (status 400): Bad Request: chat not found"
        );
    }
}
