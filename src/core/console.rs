use crate::domain::ports::LineSink;
use crate::utils::error::Result;
use std::io::Write;

/// Writes `message` followed by a newline to stdout.
///
/// Panics if stdout cannot be written, like `println!`. Backs the `log`
/// subcommand.
pub fn log(message: &str) {
    println!("{message}");
}

/// Writes `message` to `sink` as exactly one line.
pub fn log_to<S: LineSink>(mut sink: S, message: &str) -> Result<()> {
    sink.write_line(message)
}

/// The process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl LineSink for Stdout {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}

/// Adapts any `io::Write` into a sink.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.inner, "{line}")?;
        Ok(())
    }
}

/// Records every line it receives, one entry per write.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Capture {
    lines: Vec<String>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn write_count(&self) -> usize {
        self.lines.len()
    }
}

impl LineSink for Capture {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
