//! The live command-stream cursor.
//!
//! The dispatcher's `open` handler and a `ProgramBlock`'s own re-execution of
//! its captured body both need to pull the *next* command from whatever
//! stream is currently active — a file, the REPL, or a block's own command
//! slice. [`CommandSource`] is that shared cursor, so `open`/`close` capture
//! works identically regardless of which of the three is driving.

use crate::error::ScuttleError;
use crate::parse::{self, Command};

/// Yields parsed commands one at a time, or `None` at end of input.
pub trait CommandSource {
    /// # Errors
    /// Returns a [`ScuttleError`] if the next line fails to parse.
    fn next_command(&mut self) -> Result<Option<Command>, ScuttleError>;
}

/// Reads commands from any line iterator, skipping blank and `#`-comment
/// lines. Used for file mode; the REPL uses its own source so it can print a
/// prompt before each read.
pub struct LineSource<I> {
    lines: I,
}

impl<I> LineSource<I> {
    pub fn new(lines: I) -> Self {
        Self { lines }
    }
}

impl<I, E> CommandSource for LineSource<I>
where
    I: Iterator<Item = Result<String, E>>,
    ScuttleError: From<E>,
{
    fn next_command(&mut self) -> Result<Option<Command>, ScuttleError> {
        for line in self.lines.by_ref() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Ok(Some(parse::parse_line(trimmed)?));
        }
        Ok(None)
    }
}

/// A fixed, already-parsed command sequence — a `ProgramBlock`'s own body,
/// re-iterated fresh on every `execute`. Never fails.
pub struct SliceSource {
    commands: std::vec::IntoIter<Command>,
}

impl SliceSource {
    #[must_use]
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            commands: commands.into_iter(),
        }
    }
}

impl CommandSource for SliceSource {
    fn next_command(&mut self) -> Result<Option<Command>, ScuttleError> {
        Ok(self.commands.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_source_skips_blank_and_comment_lines() {
        let lines = vec!["", "# a comment", "look at inventory"]
            .into_iter()
            .map(|s| Ok::<_, std::io::Error>(s.to_owned()));
        let mut source = LineSource::new(lines);
        let command = source.next_command().unwrap().unwrap();
        assert_eq!(command.verb, "look at");
        assert!(source.next_command().unwrap().is_none());
    }

    #[test]
    fn slice_source_yields_in_order_then_none() {
        let commands = vec![
            parse::parse_line("use shovel").unwrap(),
            parse::parse_line("look at inventory").unwrap(),
        ];
        let mut source = SliceSource::new(commands);
        assert_eq!(source.next_command().unwrap().unwrap().verb, "use");
        assert_eq!(source.next_command().unwrap().unwrap().verb, "look at");
        assert!(source.next_command().unwrap().is_none());
    }
}
