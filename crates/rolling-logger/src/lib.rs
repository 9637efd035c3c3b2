//! Rolling Logger
//!
//! A `tracing-subscriber` fmt layer whose writer keeps the most recent lines
//! in a circular buffer and forwards each one to a pluggable sink (browser
//! console, stderr...). `log` records are bridged in through `tracing-log`.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;
use tracing::{Metadata, Subscriber};
use tracing_log::{AsTrace, LogTracer};
use tracing_subscriber::fmt::{self, time::ChronoUtc, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;

pub use tracing::Level;

/// Destination for formatted lines
pub type Sink = Box<dyn Fn(Level, &str) + Send + Sync>;

/// Logger settings
#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    /// Number of lines retained in memory
    pub capacity: usize,
    /// Most verbose level accepted
    pub level: log::LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: 500,
            level: log::LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("log bridge already installed: {0}")]
    Bridge(#[from] log::SetLoggerError),
    #[error("global subscriber already set: {0}")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

struct Ring {
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
    sink: Option<Sink>,
}

impl Ring {
    fn lines(&self) -> MutexGuard<'_, VecDeque<String>> {
        match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn record(&self, level: Level, line: String) {
        if let Some(sink) = &self.sink {
            sink(level, &line);
        }
        if self.capacity == 0 {
            return;
        }
        let mut lines = self.lines();
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

/// Shared handle on the buffered lines; clones see the same buffer
#[derive(Clone)]
pub struct RingBuffer {
    ring: Arc<Ring>,
}

impl RingBuffer {
    pub fn new(capacity: usize, sink: Option<Sink>) -> Self {
        Self {
            ring: Arc::new(Ring {
                capacity,
                lines: Mutex::new(VecDeque::with_capacity(capacity)),
                sink,
            }),
        }
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        self.ring.lines().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.ring.lines().clear();
    }

    fn writer(&self, level: Level) -> LineWriter {
        LineWriter {
            ring: Arc::clone(&self.ring),
            level,
            buf: Vec::new(),
        }
    }
}

/// Collects one formatted event and commits it on drop
pub struct LineWriter {
    ring: Arc<Ring>,
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();
        if !line.is_empty() {
            self.ring.record(self.level, line.to_string());
        }
    }
}

impl<'a> MakeWriter<'a> for RingBuffer {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.writer(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.writer(*meta.level())
    }
}

/// Subscriber formatting every event up to `level` into `buffer` as
/// `<rfc3339> <LEVEL> <target>: <message>`
pub fn subscriber(level: log::LevelFilter, buffer: RingBuffer) -> impl Subscriber + Send + Sync + 'static {
    let layer = fmt::layer()
        .with_writer(buffer)
        .with_ansi(false)
        .with_target(true)
        .with_timer(ChronoUtc::rfc_3339());
    tracing_subscriber::registry().with(level.as_trace()).with(layer)
}

/// Install the subscriber globally and bridge the `log` facade into it.
///
/// The returned handle stays valid for the rest of the program.
pub fn init(config: LoggerConfig, sink: Option<Sink>) -> Result<RingBuffer, LoggerError> {
    let buffer = RingBuffer::new(config.capacity, sink);
    LogTracer::init_with_filter(config.level)?;
    tracing::subscriber::set_global_default(subscriber(config.level, buffer.clone()))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(level: log::LevelFilter, buffer: &RingBuffer, f: impl FnOnce()) {
        tracing::subscriber::with_default(subscriber(level, buffer.clone()), f);
    }

    #[test]
    fn test_ring_evicts_oldest() {
        let buffer = RingBuffer::new(2, None);
        capture(log::LevelFilter::Trace, &buffer, || {
            tracing::info!("one");
            tracing::info!("two");
            tracing::info!("three");
        });

        let lines = buffer.recent_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("rolling_logger::tests: two"));
        assert!(lines[1].ends_with("rolling_logger::tests: three"));
    }

    #[test]
    fn test_level_filter() {
        let buffer = RingBuffer::new(10, None);
        capture(log::LevelFilter::Warn, &buffer, || {
            tracing::info!("quiet");
            tracing::error!("loud");
        });

        let lines = buffer.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].ends_with("loud"));
    }

    #[test]
    fn test_sink_receives_level_and_line() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_in_sink = seen.clone();
        let buffer = RingBuffer::new(
            0,
            Some(Box::new(move |level, line| {
                seen_in_sink.lock().unwrap().push((level, line.to_string()));
            })),
        );
        capture(log::LevelFilter::Info, &buffer, || tracing::warn!("marker skipped"));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, Level::WARN);
        assert!(seen[0].1.ends_with("marker skipped"));
        // zero capacity keeps nothing
        assert!(buffer.recent_lines().is_empty());
    }

    #[test]
    fn test_clear_empties_shared_buffer() {
        let buffer = RingBuffer::new(10, None);
        let handle = buffer.clone();
        capture(log::LevelFilter::Info, &buffer, || tracing::info!("kept"));
        assert_eq!(handle.recent_lines().len(), 1);

        handle.clear();
        assert!(buffer.recent_lines().is_empty());
    }
}
