use anyhow::Result;
use chrono::Local;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::Subscriber;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::log_buffer::{LogBuffer, LogEntry};

/// Initialize tracing with a log file and an in-memory buffer for the logs screen.
/// Logs are written to ~/.config/dispensa/logs/dispensa-YYYY-MM-DD-HH-MM-SS.log
pub fn init_logging_with_buffer(buffer: LogBuffer) -> Result<PathBuf> {
    let config_dir =
        dirs::config_dir().ok_or(anyhow::anyhow!("Could not find config directory"))?;

    let log_dir = logs_dir(&config_dir);
    std::fs::create_dir_all(&log_dir)?;

    let log_filename = log_file_name(Local::now());
    let log_path = log_dir.join(&log_filename);

    let file_appender = tracing_appender::rolling::never(&log_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    // Default to INFO, overridable with RUST_LOG
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(LogBufferLayer::new(buffer))
        .init();

    // The writer must outlive every log call
    std::mem::forget(guard);

    Ok(log_path)
}

fn log_file_name(now: chrono::DateTime<Local>) -> String {
    format!("dispensa-{}.log", now.format("%Y-%m-%d-%H-%M-%S"))
}

/// Where the session log for a given config directory lives
pub fn logs_dir(config_dir: &Path) -> PathBuf {
    config_dir.join("dispensa").join("logs")
}

/// A tracing layer that captures log entries to an in-memory buffer
pub struct LogBufferLayer {
    buffer: LogBuffer,
}

impl LogBufferLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for LogBufferLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.buffer.push(LogEntry {
            timestamp: Local::now(),
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message: visitor.finish(),
        });
    }
}

/// Collects the message plus any structured fields as `key=value`
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else {
            format!("{}{}", self.message, self.fields)
        }
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_log_file_name_is_timestamped() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(log_file_name(now), "dispensa-2024-03-09-14-05-07.log");
    }

    #[test]
    fn test_logs_dir_under_app_config() {
        assert_eq!(
            logs_dir(Path::new("/home/me/.config")),
            PathBuf::from("/home/me/.config/dispensa/logs")
        );
    }

    #[test]
    fn test_buffer_layer_captures_message_and_fields() {
        let buffer = LogBuffer::new(10);
        let subscriber = tracing_subscriber::registry().with(LogBufferLayer::new(buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Deleted category Igiene");
            tracing::warn!(cards = 5, "Rendered");
        });

        let entries = buffer.get_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "Deleted category Igiene");
        assert_eq!(entries[0].level, tracing::Level::INFO);
        assert_eq!(entries[1].message, "Rendered cards=5");
    }
}
