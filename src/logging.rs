//! Logging sink for processing messages.
//!
//! The [`LogSink`] trait is the seam between processing code and the log
//! destination: the caller builds one sink before the batch and owns its
//! lifecycle. The production implementation is [`FileLog`]; tests swap in a
//! recording sink.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Where per-file processing messages go.
///
/// One info message is emitted per successful upscale-and-write and one
/// error message per failed file; both always include the file path.
pub trait LogSink {
    fn info(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Line-oriented log file, truncated on creation.
pub struct FileLog {
    writer: BufWriter<File>,
}

impl FileLog {
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self {
            writer: BufWriter::new(File::create(path)?),
        })
    }

    fn write_line(&mut self, level: &str, message: &str) {
        // Log writes are best-effort; a full disk must not abort the batch
        let _ = writeln!(self.writer, "{level} {message}");
    }
}

impl LogSink for FileLog {
    fn info(&mut self, message: &str) {
        self.write_line("INFO", message);
    }

    fn error(&mut self, message: &str) {
        self.write_line("ERROR", message);
    }
}

impl Drop for FileLog {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
