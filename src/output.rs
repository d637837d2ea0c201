//! Output management module
//!
//! Writes the result sequence, one word per line, and the execution-time line.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{FilterError, Result};
use crate::processor::ScanReport;

/// Buffer size for result writing
const BUFFER_SIZE: usize = 64 * 1024;

/// Buffered file writer for the result words (`--output`)
pub struct ResultWriter {
    writer: BufWriter<File>,
    target: PathBuf,
    lines_written: u64,
}

impl ResultWriter {
    /// Create (or truncate) a file and write to it
    pub fn file(path: &Path) -> Result<Self> {
        let file: File = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| FilterError::from_io(path, e))?;

        Ok(Self {
            writer: BufWriter::with_capacity(BUFFER_SIZE, file),
            target: path.to_path_buf(),
            lines_written: 0,
        })
    }

    /// Write a line to the output
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line).map_err(|e| self.io_error(e))?;
        self.lines_written += 1;
        Ok(())
    }

    /// Write every word of the result sequence
    pub fn write_words(&mut self, words: &[String]) -> Result<()> {
        for word in words {
            self.write_line(word)?;
        }
        Ok(())
    }

    /// Flush the buffer
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| self.io_error(e))
    }

    /// Get the output target
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Get number of lines written
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    fn io_error(&self, e: io::Error) -> FilterError {
        FilterError::Io {
            path: self.target.clone(),
            source: e,
        }
    }
}

impl Drop for ResultWriter {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

/// The trailing timing line, e.g. `Execution time: 0.0123`
pub fn execution_time_line(elapsed: Duration) -> String {
    format!("Execution time: {}", elapsed.as_secs_f64())
}

/// Write the matched words followed by the execution-time line
pub fn write_report<W: Write>(report: &ScanReport, out: &mut W) -> io::Result<()> {
    for word in &report.words {
        writeln!(out, "{}", word)?;
    }
    writeln!(out, "{}", execution_time_line(report.stats.elapsed))?;
    out.flush()
}
