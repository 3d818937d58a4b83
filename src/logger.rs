//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! and forwards them to the application for display in the log panel.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{mpsc, Arc, Mutex};

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {:<5} {}", timestamp, level_str, record.args())
}

/// Custom logger that forwards formatted entries to a callback
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}

/// Install the global logger. Entries are sent over the returned channel so
/// that the render loop can move them into state without holding its lock
/// while logging.
///
pub fn init(level: LevelFilter) -> AppResult<mpsc::Receiver<String>> {
    let (tx, rx) = mpsc::channel::<String>();
    let tx = Mutex::new(tx);
    let logger = CustomLogger::new(level);
    logger.set_log_callback(Box::new(move |entry| {
        if let Ok(sender) = tx.lock() {
            let _ = sender.send(entry);
        }
    }));
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_log_contains_level_and_message() {
        let formatted = format_log(
            &Record::builder()
                .args(format_args!("Scrolling to section 'why'."))
                .level(Level::Debug)
                .build(),
        );
        assert!(formatted.contains("DEBUG"));
        assert!(formatted.ends_with("Scrolling to section 'why'."));
    }

    #[test]
    fn test_logger_respects_level() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&captured);
        let logger = CustomLogger::new(LevelFilter::Info);
        logger.set_log_callback(Box::new(move |entry| sink.lock().unwrap().push(entry)));

        logger.log(
            &Record::builder()
                .args(format_args!("hidden"))
                .level(Level::Debug)
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("shown"))
                .level(Level::Warn)
                .build(),
        );
        let entries = captured.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("WARN"));
        assert!(entries[0].ends_with("shown"));
    }
}
