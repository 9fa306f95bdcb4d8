//! Logcat-style text sink for terminals and files

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::Local;

use super::{LogSink, SinkRecord};

/// Writes `MM-DD HH:MM:SS.mmm P/Tag: text` lines to any writer
///
/// Multi-line text (an attached error trace, for instance) gets the prefix on
/// every line, the way logcat prints it.
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
    timestamps: bool,
}

impl ConsoleSink {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            timestamps: true,
        }
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Leave out the timestamp column
    pub fn without_timestamps(mut self) -> Self {
        self.timestamps = false;
        self
    }

    fn render(&self, record: &SinkRecord<'_>) -> String {
        let prefix = if self.timestamps {
            format!(
                "{} {}/{}: ",
                Local::now().format("%m-%d %H:%M:%S%.3f"),
                record.priority.as_char(),
                record.tag
            )
        } else {
            format!("{}/{}: ", record.priority.as_char(), record.tag)
        };

        let mut out = String::new();
        for line in record.full_text().lines() {
            out.push_str(&prefix);
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl LogSink for ConsoleSink {
    fn write(&self, record: &SinkRecord<'_>) {
        let rendered = self.render(record);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(rendered.as_bytes());
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Priority;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_console_sink_line_format() {
        let buf = SharedBuf::default();
        let sink = ConsoleSink::new(buf.clone()).without_timestamps();

        sink.write(&SinkRecord {
            priority: Priority::Info,
            tag: "SampleApp",
            text: "main  app.onCreate(): started",
            error: None,
        });

        assert_eq!(buf.contents(), "I/SampleApp: main  app.onCreate(): started\n");
    }

    #[test]
    fn test_console_sink_prefixes_every_trace_line() {
        let buf = SharedBuf::default();
        let sink = ConsoleSink::new(buf.clone()).without_timestamps();
        let err = io::Error::new(io::ErrorKind::Other, "denied");

        sink.write(&SinkRecord {
            priority: Priority::Error,
            tag: "App",
            text: "write failed",
            error: Some(&err),
        });

        assert_eq!(buf.contents(), "E/App: write failed\nE/App: denied\n");
    }

    #[test]
    fn test_console_sink_timestamp_column() {
        let buf = SharedBuf::default();
        let sink = ConsoleSink::new(buf.clone());

        sink.write(&SinkRecord {
            priority: Priority::Warn,
            tag: "App",
            text: "careful",
            error: None,
        });

        let out = buf.contents();
        // "MM-DD HH:MM:SS.mmm " is 19 characters
        assert_eq!(&out[19..], "W/App: careful\n");
    }
}
