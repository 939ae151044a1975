//! Leveled progress logging for benchmark runs
//!
//! All log lines go to stderr so the report on stdout stays machine-readable.
//! Every line carries the run's correlation id, letting output from repeated
//! runs against the same regions be told apart.

use chrono::Utc;
use colored::Colorize;
use std::io::{self, Write};
use uuid::Uuid;

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    /// Get log level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn colorize(&self, text: &str) -> String {
        match self {
            LogLevel::Debug => text.cyan().to_string(),
            LogLevel::Info => text.green().to_string(),
            LogLevel::Warn => text.yellow().to_string(),
            LogLevel::Error => text.red().to_string(),
        }
    }
}

/// Stderr logger carrying a per-run correlation id
#[derive(Debug, Clone)]
pub struct RunLogger {
    run_id: String,
    min_level: LogLevel,
    use_color: bool,
}

impl RunLogger {
    /// Create a logger for one run. Debug mode lowers the gate to `Debug`,
    /// verbose to `Info`; otherwise only warnings and errors are shown.
    pub fn new(debug: bool, verbose: bool, use_color: bool) -> Self {
        let min_level = if debug {
            LogLevel::Debug
        } else if verbose {
            LogLevel::Info
        } else {
            LogLevel::Warn
        };

        Self {
            run_id: Uuid::new_v4().simple().to_string()[..8].to_string(),
            min_level,
            use_color,
        }
    }

    /// Correlation id shared by every line this logger emits
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%H:%M:%S%.3f");
        let label = if self.use_color {
            level.colorize(level.as_str())
        } else {
            level.as_str().to_string()
        };

        let mut stderr = io::stderr().lock();
        // A failed stderr write must never abort a measurement in progress.
        let _ = writeln!(
            stderr,
            "{} [{}] [{}] {}",
            timestamp, label, self.run_id, message
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(LogLevel::Debug.as_str(), "DEBUG");
        assert_eq!(LogLevel::Error.as_str(), "ERROR");
    }

    #[test]
    fn test_gate_selection() {
        assert_eq!(RunLogger::new(true, false, false).min_level, LogLevel::Debug);
        assert_eq!(RunLogger::new(false, true, false).min_level, LogLevel::Info);
        assert_eq!(RunLogger::new(false, false, false).min_level, LogLevel::Warn);
        // Debug wins over verbose when both are set.
        assert_eq!(RunLogger::new(true, true, false).min_level, LogLevel::Debug);
    }

    #[test]
    fn test_run_ids_are_distinct() {
        let a = RunLogger::new(false, false, false);
        let b = RunLogger::new(false, false, false);
        assert_ne!(a.run_id(), b.run_id());
        assert_eq!(a.run_id().len(), 8);
    }

    #[test]
    fn test_logging_does_not_panic() {
        let logger = RunLogger::new(true, true, true);
        logger.debug("debug line");
        logger.info("info line");
        logger.warn("warn line");
        logger.error("error line");
    }
}
