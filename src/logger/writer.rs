//! Log writer module
//!
//! Provides thread-safe line writing to stderr, a file, or any injected
//! writer. Supports runtime reconfiguration of the target.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// Log output target
pub enum LogTarget {
    /// Write to stderr
    Stderr,
    /// Append to a file
    File(File),
    /// Write to an arbitrary sink
    Writer(Box<dyn Write + Send>),
}

impl LogTarget {
    /// Open (or create) a log file for appending
    pub fn file(path: &Path) -> io::Result<Self> {
        open_log_file(path).map(Self::File)
    }
}

impl std::fmt::Debug for LogTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stderr => f.write_str("Stderr"),
            Self::File(file) => f.debug_tuple("File").field(file).finish(),
            Self::Writer(_) => f.write_str("Writer"),
        }
    }
}

/// Thread-safe log writer
#[derive(Debug)]
pub struct LogWriter {
    target: Mutex<LogTarget>,
}

impl LogWriter {
    pub fn new(target: LogTarget) -> Self {
        Self {
            target: Mutex::new(target),
        }
    }

    /// Write one complete line. The lock is held for the whole line so
    /// concurrent requests never interleave inside a line. A lock poisoned
    /// by a panicking sink is recovered.
    pub fn write_line(&self, line: &str) {
        let mut target = self.target.lock().unwrap_or_else(PoisonError::into_inner);
        write_to_target(&mut target, line);
    }

    /// Replace the output target
    pub fn set_target(&self, target: LogTarget) {
        *self.target.lock().unwrap_or_else(PoisonError::into_inner) = target;
    }

    /// Switch to a log file, or back to stderr with `None`
    pub fn set_log_file(&self, path: Option<&Path>) -> io::Result<()> {
        let target = match path {
            Some(p) => LogTarget::file(p)?,
            None => LogTarget::Stderr,
        };
        self.set_target(target);
        Ok(())
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &Path) -> io::Result<File> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Write a line to the target, ignoring write failures
fn write_to_target(target: &mut LogTarget, line: &str) {
    match target {
        LogTarget::Stderr => {
            let _ = writeln!(io::stderr().lock(), "{line}");
        }
        LogTarget::File(file) => {
            let _ = writeln!(file, "{line}");
        }
        LogTarget::Writer(writer) => {
            let _ = writeln!(writer, "{line}");
            let _ = writer.flush();
        }
    }
}
