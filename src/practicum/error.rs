//! Типы ошибок клиента API Яндекс Практикума.
//!
//! Тексты ошибок на русском: они уходят в Telegram как часть сообщения
//! `Сбой в работе программы: ...`.

use thiserror::Error;

/// Ошибки, возникающие при опросе API статусов домашних работ.
#[derive(Debug, Error)]
pub enum PracticumError {
    /// Эндпоинт ответил кодом, отличным от 2xx.
    #[error("эндпоинт вернул код {status} {reason}")]
    Http { status: u16, reason: String },

    /// Тело ответа не соответствует ожидаемой структуре.
    #[error("{0}")]
    Format(String),

    /// Статус работы отсутствует в таблице вердиктов.
    #[error("Недокументированный статус домашней работы: {0}")]
    UnknownStatus(String),

    /// Сбой на сетевом уровне (DNS, соединение, таймаут).
    #[error("сетевая ошибка: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display() {
        let err = PracticumError::Http {
            status: 500,
            reason: "Internal Server Error".into(),
        };
        assert_eq!(
            err.to_string(),
            "эндпоинт вернул код 500 Internal Server Error"
        );
    }

    #[test]
    fn unknown_status_display_names_the_key() {
        let err = PracticumError::UnknownStatus("graded".into());
        assert!(err.to_string().ends_with(": graded"));
    }

    #[test]
    fn format_error_is_passed_through() {
        let err = PracticumError::Format("Ответ API не является словарём".into());
        assert_eq!(err.to_string(), "Ответ API не является словарём");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PracticumError>();
    }
}
