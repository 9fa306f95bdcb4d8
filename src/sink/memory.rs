//! In-memory capture sink
//!
//! A bounded ring buffer of emitted lines. Handy for tests and for in-app
//! log viewers.

use std::collections::VecDeque;
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use super::{error_trace, LogSink, Priority, SinkRecord};

/// A line captured by [`MemorySink`]
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedLine {
    /// When the sink received the line
    pub timestamp: DateTime<Utc>,
    pub priority: Priority,
    pub tag: String,
    pub text: String,
    /// Rendered error trace, if an error was attached
    pub error: Option<String>,
}

/// Thread-safe ring buffer sink
pub struct MemorySink {
    /// All lines (capped at max_entries)
    entries: RwLock<VecDeque<CapturedLine>>,
    max_entries: usize,
}

impl MemorySink {
    /// Create a sink that keeps the newest `max_entries` lines
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::with_capacity(max_entries)),
            max_entries,
        }
    }

    fn push(&self, line: CapturedLine) {
        if self.max_entries == 0 {
            return;
        }
        if let Ok(mut entries) = self.entries.write() {
            if entries.len() >= self.max_entries {
                entries.pop_front();
            }
            entries.push_back(line);
        }
    }

    /// Snapshot of every captured line, oldest first
    pub fn all_entries(&self) -> Vec<CapturedLine> {
        self.entries
            .read()
            .map(|e| e.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Most recent captured line
    pub fn last(&self) -> Option<CapturedLine> {
        self.entries.read().ok().and_then(|e| e.back().cloned())
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every captured line
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new(10_000)
    }
}

impl LogSink for MemorySink {
    fn write(&self, record: &SinkRecord<'_>) {
        self.push(CapturedLine {
            timestamp: Utc::now(),
            priority: record.priority,
            tag: record.tag.to_string(),
            text: record.text.to_string(),
            error: record.error.map(error_trace),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<'a>(priority: Priority, text: &'a str) -> SinkRecord<'a> {
        SinkRecord {
            priority,
            tag: "test",
            text,
            error: None,
        }
    }

    #[test]
    fn test_memory_sink_write_and_retrieve() {
        let sink = MemorySink::new(100);

        sink.write(&record(Priority::Info, "message 1"));
        sink.write(&record(Priority::Warn, "warning 1"));
        sink.write(&record(Priority::Assert, "wtf 1"));

        assert_eq!(sink.len(), 3);

        let entries = sink.all_entries();
        assert_eq!(entries[0].text, "message 1");
        assert_eq!(entries[2].priority, Priority::Assert);
        assert_eq!(entries[1].tag, "test");
        assert!(entries[0].error.is_none());
    }

    #[test]
    fn test_memory_sink_capacity() {
        let sink = MemorySink::new(3);

        for i in 0..5 {
            let text = format!("msg {}", i);
            sink.write(&record(Priority::Debug, &text));
        }

        assert_eq!(sink.len(), 3);
        let entries = sink.all_entries();
        assert_eq!(entries[0].text, "msg 2");
        assert_eq!(entries[2].text, "msg 4");
        assert_eq!(sink.last().map(|l| l.text), Some("msg 4".to_string()));
    }

    #[test]
    fn test_memory_sink_zero_capacity_keeps_nothing() {
        let sink = MemorySink::new(0);
        sink.write(&record(Priority::Error, "dropped"));
        assert!(sink.is_empty());
        assert!(sink.last().is_none());
    }

    #[test]
    fn test_memory_sink_renders_error() {
        let sink = MemorySink::default();
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        sink.write(&SinkRecord {
            error: Some(&err),
            ..record(Priority::Error, "save failed")
        });

        let line = sink.last().unwrap();
        assert_eq!(line.error.as_deref(), Some("disk gone"));

        sink.clear();
        assert!(sink.is_empty());
    }
}
