//! Журнал в два приёмника: стандартный вывод и дописываемый файл.
//!
//! Обе копии строки одинаковы: `<время> - [<УРОВЕНЬ>] - <сообщение>`.

use std::fmt;
use std::fs::OpenOptions;
use std::sync::Mutex;

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use crate::error::BotError;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Formats one event per line in the bot's log layout.
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} - [{}] - ",
            Local::now().format(TIME_FORMAT),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Builds the subscriber: level filter, stdout sink and `file` sink.
pub fn build_subscriber<W>(
    level: &str,
    file: W,
) -> Result<impl Subscriber + Send + Sync + use<W>, BotError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(level)
        .map_err(|e| BotError::Config(format!("invalid log level `{level}`: {e}")))?;

    Ok(tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(LineFormat)
                .with_writer(std::io::stdout),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(LineFormat)
                .with_writer(file),
        ))
}

/// Opens `log_file` for appending and installs the global subscriber.
pub fn init(log_file: &str, level: &str) -> Result<(), BotError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;
    build_subscriber(level, Mutex::new(file))?
        .try_init()
        .map_err(|e| BotError::Config(format!("logger already installed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BotConfig;
    use tracing::{debug, error, info};

    fn capture(level: &str, emit: impl FnOnce()) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();
        let subscriber = build_subscriber(level, Mutex::new(file)).unwrap();
        tracing::subscriber::with_default(subscriber, emit);
        std::fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn line_layout_matches_log_format() {
        let contents = capture("debug", || info!("Отправлено сообщение для id {}", 42));
        let line = contents.lines().next().unwrap();
        let (timestamp, rest) = line.split_once(" - ").unwrap();
        assert_eq!(rest, "[INFO] - Отправлено сообщение для id 42");
        assert_eq!(timestamp.len(), "2026-01-01 00:00:00,000".len());
        assert_eq!(&timestamp[19..20], ",");
    }

    #[test]
    fn levels_are_rendered_in_brackets() {
        let contents = capture("debug", || {
            debug!("d");
            error!("e");
        });
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - [DEBUG] - d"));
        assert!(lines[1].ends_with(" - [ERROR] - e"));
    }

    #[test]
    fn filter_drops_lower_levels() {
        let contents = capture("info", || {
            debug!("hidden");
            info!("shown");
        });
        assert!(!contents.contains("hidden"));
        assert!(contents.contains("[INFO] - shown"));
    }

    #[test]
    fn file_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.log");
        std::fs::write(&path, "previous run\n").unwrap();
        let file = OpenOptions::new().append(true).open(&path).unwrap();
        let subscriber = build_subscriber("debug", Mutex::new(file)).unwrap();
        tracing::subscriber::with_default(subscriber, || info!("next run"));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("previous run\n"));
        assert!(contents.contains("[INFO] - next run"));
    }

    #[test]
    fn default_level_keeps_library_events_out() {
        let contents = capture(&BotConfig::default().log_level, || {
            debug!(target: "reqwest::connect", "starting new connection");
            debug!(target: "hyper_util::client::legacy::pool", "pooling idle connection");
            debug!("Новых статусов нет");
        });
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 1, "{contents}");
        assert!(lines[0].ends_with(" - [DEBUG] - Новых статусов нет"));
    }

    #[test]
    fn invalid_level_is_config_error() {
        let result = build_subscriber("homework_bot=loud", Mutex::new(Vec::<u8>::new()));
        assert!(matches!(result, Err(BotError::Config(_))));
    }
}
