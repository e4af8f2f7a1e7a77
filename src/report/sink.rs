//! Output sinks for reports, progress and diagnostics
//!
//! Components never print directly. They hand finished text to a [`ReportSink`], which
//! decides where it goes: the real stdout/stderr, any writer, or memory for tests.

use console::style;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Destination for everything a run produces
pub trait ReportSink {
    /// A rendered table. Framed by blank lines on output.
    fn table(&self, table: &str);

    /// A machine-readable document (JSON), written as-is
    fn document(&self, text: &str);

    /// Verbose progress line
    fn progress(&self, line: &str);

    /// Warning line (incomparable or orphaned files)
    fn warning(&self, line: &str);

    /// Non-fatal per-file error line
    fn error(&self, line: &str);
}

/// Writer-backed sink: report output to `out`, diagnostics to `err`
pub struct StreamSink<O: Write, E: Write> {
    out: Mutex<O>,
    err: Mutex<E>,
}

/// Sink bound to the process's standard streams
pub type ConsoleSink = StreamSink<io::Stdout, io::Stderr>;

impl ConsoleSink {
    /// Report to stdout, diagnostics to stderr
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> StreamSink<O, E> {
    /// Create a sink over two writers
    pub fn new(out: O, err: E) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    /// Recover the writers
    pub fn into_inner(self) -> (O, E) {
        (self.out.into_inner(), self.err.into_inner())
    }
}

// Output is best effort: a closed pipe must not turn into a failed comparison
impl<O: Write, E: Write> ReportSink for StreamSink<O, E> {
    fn table(&self, table: &str) {
        let mut out = self.out.lock();
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", table);
        let _ = writeln!(out);
        let _ = out.flush();
    }

    fn document(&self, text: &str) {
        let mut out = self.out.lock();
        let _ = writeln!(out, "{}", text);
        let _ = out.flush();
    }

    fn progress(&self, line: &str) {
        let mut out = self.out.lock();
        let _ = writeln!(out, "{}", line);
    }

    fn warning(&self, line: &str) {
        let _ = writeln!(self.err.lock(), "{}", style(line).yellow().for_stderr());
    }

    fn error(&self, line: &str) {
        let _ = writeln!(self.err.lock(), "{}", style(line).red().for_stderr());
    }
}

/// One recorded sink call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    /// See [`ReportSink::table`]
    Table(String),
    /// See [`ReportSink::document`]
    Document(String),
    /// See [`ReportSink::progress`]
    Progress(String),
    /// See [`ReportSink::warning`]
    Warning(String),
    /// See [`ReportSink::error`]
    Error(String),
}

/// In-memory sink for testing
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<ReportEvent>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in the order they were produced
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().clone()
    }

    /// Rendered tables
    pub fn tables(&self) -> Vec<String> {
        self.collect(|event| match event {
            ReportEvent::Table(text) => Some(text),
            _ => None,
        })
    }

    /// Documents
    pub fn documents(&self) -> Vec<String> {
        self.collect(|event| match event {
            ReportEvent::Document(text) => Some(text),
            _ => None,
        })
    }

    /// Progress lines
    pub fn progress_lines(&self) -> Vec<String> {
        self.collect(|event| match event {
            ReportEvent::Progress(text) => Some(text),
            _ => None,
        })
    }

    /// Warning lines
    pub fn warnings(&self) -> Vec<String> {
        self.collect(|event| match event {
            ReportEvent::Warning(text) => Some(text),
            _ => None,
        })
    }

    /// Error lines
    pub fn errors(&self) -> Vec<String> {
        self.collect(|event| match event {
            ReportEvent::Error(text) => Some(text),
            _ => None,
        })
    }

    fn collect<F>(&self, pick: F) -> Vec<String>
    where
        F: Fn(&ReportEvent) -> Option<&String>,
    {
        self.events.lock().iter().filter_map(pick).cloned().collect()
    }

    fn push(&self, event: ReportEvent) {
        self.events.lock().push(event);
    }
}

impl ReportSink for MemorySink {
    fn table(&self, table: &str) {
        self.push(ReportEvent::Table(table.to_string()));
    }

    fn document(&self, text: &str) {
        self.push(ReportEvent::Document(text.to_string()));
    }

    fn progress(&self, line: &str) {
        self.push(ReportEvent::Progress(line.to_string()));
    }

    fn warning(&self, line: &str) {
        self.push(ReportEvent::Warning(line.to_string()));
    }

    fn error(&self, line: &str) {
        self.push(ReportEvent::Error(line.to_string()));
    }
}
