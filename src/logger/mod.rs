//! Logger module
//!
//! Leveled logger shared by the whole server:
//! - Ordered severity levels with threshold filtering
//! - Optional correlation context per line
//! - Request logging middleware (see [`Logger::middleware`])
//!
//! A single instance is created at startup and handed around as
//! `Arc<Logger>`.

mod format;
mod middleware;
pub mod writer;

pub use writer::{LogTarget, LogWriter};

use chrono::Local;
use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// Log severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum LogLevel {
    /// Returned when no logger exists. Never used as a message level.
    #[default]
    Undefined = 0,
    Debug = 1,
    Info = 2,
    Warning = 3,
    Error = 4,
}

impl LogLevel {
    const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Debug,
            2 => Self::Info,
            3 => Self::Warning,
            4 => Self::Error,
            _ => Self::Undefined,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level '{0}' (expected debug, info, warning or error)")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Leveled logger writing one line per emitted message
#[derive(Debug)]
pub struct Logger {
    level: AtomicU8,
    writer: LogWriter,
}

impl Logger {
    /// Create a logger writing to stderr
    pub fn new(level: LogLevel) -> Self {
        Self::with_target(level, LogTarget::Stderr)
    }

    pub fn with_target(level: LogLevel, target: LogTarget) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
            writer: LogWriter::new(target),
        }
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Redirect output to a file (`None` switches back to stderr)
    pub fn set_log_file(&self, path: Option<&Path>) -> io::Result<()> {
        self.writer.set_log_file(path)
    }

    /// Whether a message at `level` would be written
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.level() <= level
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, None, args);
    }

    pub fn debug_with_context(&self, ctx: &str, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, Some(ctx), args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, None, args);
    }

    pub fn info_with_context(&self, ctx: &str, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, Some(ctx), args);
    }

    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warning, None, args);
    }

    pub fn warning_with_context(&self, ctx: &str, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warning, Some(ctx), args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, None, args);
    }

    pub fn error_with_context(&self, ctx: &str, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, Some(ctx), args);
    }

    fn log(&self, level: LogLevel, ctx: Option<&str>, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        let line = format::format_line(&Local::now(), level, ctx, args);
        self.writer.write_line(&line);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

/// Set the level of an optional logger; no-op when absent
pub fn set_level(logger: Option<&Logger>, level: LogLevel) {
    if let Some(l) = logger {
        l.set_level(level);
    }
}

/// Level of an optional logger, `Undefined` when absent
pub fn level_of(logger: Option<&Logger>) -> LogLevel {
    logger.map_or(LogLevel::Undefined, Logger::level)
}
