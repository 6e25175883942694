//! Log line format module
//!
//! Every line looks like
//! `2024/01/23 01:23:45 [Info] {8c1f...} Received request for '/a'.`
//! where the `{context}` part is only present for context-tagged calls.

use chrono::{DateTime, Local};
use std::fmt::{self, Write};

use super::LogLevel;

/// Timestamp layout: local date and time, second precision
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Render a complete log line
pub fn format_line(
    time: &DateTime<Local>,
    level: LogLevel,
    context: Option<&str>,
    args: fmt::Arguments<'_>,
) -> String {
    let mut line = String::with_capacity(64);
    // Writing into a String only fails if a Display impl in `args` fails
    let _ = write!(line, "{} [{}] ", time.format(TIMESTAMP_FORMAT), level);
    if let Some(ctx) = context {
        let _ = write!(line, "{{{ctx}}} ");
    }
    let _ = line.write_fmt(args);
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 23, 1, 23, 45).unwrap()
    }

    #[test]
    fn test_format_without_context() {
        let line = format_line(
            &fixed_time(),
            LogLevel::Info,
            None,
            format_args!("Serving {} on HTTP port: {}", "./public", 8100),
        );
        assert_eq!(
            line,
            "2024/01/23 01:23:45 [Info] Serving ./public on HTTP port: 8100"
        );
    }

    #[test]
    fn test_format_with_context() {
        let line = format_line(
            &fixed_time(),
            LogLevel::Warning,
            Some("abc-123"),
            format_args!("slow request"),
        );
        assert_eq!(line, "2024/01/23 01:23:45 [Warning] {abc-123} slow request");
    }

    #[test]
    fn test_format_keeps_braces_in_message() {
        let line = format_line(
            &fixed_time(),
            LogLevel::Error,
            None,
            format_args!("{}", "{not a context}"),
        );
        assert!(line.ends_with("[Error] {not a context}"));
    }
}
