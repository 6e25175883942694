//! Test helpers shared by unit tests

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-memory log sink that can be inspected after writing
#[derive(Clone, Default)]
pub struct CaptureBuffer(Arc<Mutex<Vec<u8>>>);

impl CaptureBuffer {
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(ToString::to_string)
            .collect()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Parse the `in <duration>.` tail of a "Processed request" line, where the
/// duration uses `Duration`'s debug format (`52.3ms`, `1.2s`, `830µs`).
pub fn parse_logged_duration(line: &str) -> Duration {
    let tail = line.rsplit(" in ").next().unwrap().trim_end_matches('.');
    let (number, per_second) = [("ms", 1e3), ("µs", 1e6), ("ns", 1e9), ("s", 1.0)]
        .iter()
        .find_map(|(unit, per_second)| tail.strip_suffix(unit).map(|n| (n, *per_second)))
        .unwrap();
    Duration::from_secs_f64(number.parse::<f64>().unwrap() / per_second)
}
