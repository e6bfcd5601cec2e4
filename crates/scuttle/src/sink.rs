//! Writable text destinations for `look at` output.
//!
//! Mirrors the shape of a print-writer trait with three implementations —
//! one writing to real stdout, one collecting into a string for tests, one
//! discarding everything — so the interpreter never has to know which of
//! those it's talking to.

use std::io::{self, Write as _};

/// Where `look at` output goes.
pub trait Sink {
    /// Writes one line of output, followed by a newline.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Writes to real stdout. The default sink for file and REPL execution.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{line}")?;
        stdout.flush()
    }
}

/// Collects every line into a string. Used by tests to assert on exact
/// program output without touching real stdout.
#[derive(Debug, Default)]
pub struct CollectStringSink(String);

impl CollectStringSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn output(&self) -> &str {
        &self.0
    }
}

impl Sink for CollectStringSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.0.push_str(line);
        self.0.push('\n');
        Ok(())
    }
}

/// Discards all output.
#[derive(Debug, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn write_line(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }
}
