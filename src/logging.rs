//! Leveled console logging for the speed tester
//!
//! A small logger writing timestamped lines to stderr so log output never
//! interleaves with the measurement report on stdout. The level filter is
//! derived from the `--verbose` and `--debug` flags at startup.

use crate::error::{AppError, Result};
use crate::models::Config;
use chrono::Utc;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug level - detailed information for debugging
    Debug = 0,
    /// Info level - general application progress
    Info = 1,
    /// Warning level - potentially harmful situations
    Warn = 2,
    /// Error level - error events but application can continue
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
        use colored::Colorize;
        match self {
            LogLevel::Debug => text.cyan().to_string(),
            LogLevel::Info => text.green().to_string(),
            LogLevel::Warn => text.yellow().to_string(),
            LogLevel::Error => text.red().to_string(),
        }
    }
}

impl FromStr for LogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(AppError::parse(format!("Invalid log level: {}", s))),
        }
    }
}

static MIN_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Warn as u8);
static USE_COLOR: AtomicBool = AtomicBool::new(false);

/// Initialize the logger from application configuration
pub fn init(config: &Config) {
    let level = if config.debug {
        LogLevel::Debug
    } else if config.verbose {
        LogLevel::Info
    } else {
        LogLevel::Warn
    };
    set_level(level);
    USE_COLOR.store(config.enable_color, Ordering::Relaxed);
}

/// Set the minimum level that will be emitted
pub fn set_level(level: LogLevel) {
    MIN_LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Current minimum level
pub fn level() -> LogLevel {
    match MIN_LEVEL.load(Ordering::Relaxed) {
        0 => LogLevel::Debug,
        1 => LogLevel::Info,
        2 => LogLevel::Warn,
        _ => LogLevel::Error,
    }
}

/// Emit a log line if `level` passes the filter
pub fn log(level: LogLevel, component: &str, message: &str) {
    if level < self::level() {
        return;
    }

    let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
    let tag = if USE_COLOR.load(Ordering::Relaxed) {
        level.colorize(level.as_str())
    } else {
        level.as_str().to_string()
    };

    eprintln!("{} [{}] {}: {}", timestamp, tag, component, message);
}

/// Log at debug level
pub fn debug(component: &str, message: &str) {
    log(LogLevel::Debug, component, message);
}

/// Log at info level
pub fn info(component: &str, message: &str) {
    log(LogLevel::Info, component, message);
}

/// Log at warn level
pub fn warn(component: &str, message: &str) {
    log(LogLevel::Warn, component, message);
}

/// Log at error level
pub fn error(component: &str, message: &str) {
    log(LogLevel::Error, component, message);
}
