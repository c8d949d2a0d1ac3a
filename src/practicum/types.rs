//! Data shapes of the homework status API and the helpers that interpret them.
//!
//! The response is kept as a raw [`serde_json::Value`] until
//! [`validate_response`] has checked its structure, so malformed bodies are
//! reported as [`PracticumError::Format`] instead of a generic decode error.

use serde::Deserialize;
use serde_json::Value;

use super::error::PracticumError;

/// Status key → text shown to the student.
pub const HOMEWORK_VERDICTS: &[(&str, &str)] = &[
    ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
    ("reviewing", "Работа взята на проверку ревьюером."),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
];

/// One element of the `homeworks` array. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Homework {
    pub homework_name: String,
    pub status: String,
}

impl Homework {
    /// Decodes a record taken from a validated `homeworks` array.
    pub fn from_value(value: &Value) -> Result<Self, PracticumError> {
        Homework::deserialize(value)
            .map_err(|e| PracticumError::Format(format!("Некорректная запись о работе: {e}")))
    }
}

/// Returns the verdict text for a status key, if the key is documented.
pub fn verdict_for(status: &str) -> Option<&'static str> {
    HOMEWORK_VERDICTS
        .iter()
        .find(|(key, _)| *key == status)
        .map(|(_, verdict)| *verdict)
}

/// Checks the top-level structure of an API response and returns the
/// `homeworks` array unchanged (it may be empty).
pub fn validate_response(response: &Value) -> Result<&[Value], PracticumError> {
    let Some(body) = response.as_object() else {
        return Err(PracticumError::Format(
            "Ответ API не является словарём".into(),
        ));
    };

    match body.get("homeworks") {
        None | Some(Value::Null) => Err(PracticumError::Format(
            "Ошибочный ответ API. Отсутствует список работ".into(),
        )),
        Some(Value::Array(homeworks)) => Ok(homeworks),
        Some(_) => Err(PracticumError::Format(
            "Ошибочный ответ API. Некорректный формат списка работ".into(),
        )),
    }
}

/// Builds the notification text for a homework whose status changed.
pub fn describe_status(homework: &Homework) -> Result<String, PracticumError> {
    let verdict = verdict_for(&homework.status)
        .ok_or_else(|| PracticumError::UnknownStatus(homework.status.clone()))?;
    Ok(format!(
        "Изменился статус проверки работы \"{}\". {verdict}",
        homework.homework_name
    ))
}

/// Reads the server-side `current_date` cursor from a response body.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}
