// Display sinks for line-oriented progress output

use std::io::{self, Write};

/// How a rendered line is written to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Rewind to column 0 afterwards so the next line replaces this one
    Overwrite,
    /// Terminate the line with a newline
    Append,
}

/// A line-oriented text output that understands [`RenderMode`]
pub trait DisplaySink {
    fn emit(&mut self, line: &str, mode: RenderMode) -> io::Result<()>;
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn emit(&mut self, line: &str, mode: RenderMode) -> io::Result<()> {
        (**self).emit(line, mode)
    }
}

/// Sink over any byte stream, using a carriage return for in-place updates
pub struct StreamSink<W: Write> {
    writer: W,
}

impl<W: Write> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl StreamSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DisplaySink for StreamSink<W> {
    fn emit(&mut self, line: &str, mode: RenderMode) -> io::Result<()> {
        match mode {
            RenderMode::Overwrite => write!(self.writer, "{}\r", line)?,
            RenderMode::Append => writeln!(self.writer, "{}", line)?,
        }
        self.writer.flush()
    }
}

/// In-memory sink that records every emitted line with its mode
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<(String, RenderMode)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[(String, RenderMode)] {
        &self.lines
    }

    /// Just the text of each emitted line, in order
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|(line, _)| line.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl DisplaySink for MemorySink {
    fn emit(&mut self, line: &str, mode: RenderMode) -> io::Result<()> {
        self.lines.push((line.to_string(), mode));
        Ok(())
    }
}
