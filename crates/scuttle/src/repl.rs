//! The interactive REPL: prints a `mi> ` prompt, reads one command at a
//! time from real stdin, and reports errors without exiting — the only way
//! out is end-of-input.

use std::io::{self, BufRead, Write as _};

use crate::dispatch;
use crate::error::ScuttleError;
use crate::flow::Flow;
use crate::inventory;
use crate::parse::{self, Command};
use crate::sink::Sink;
use crate::source::CommandSource;

/// Prompts for and parses one line at a time from stdin, skipping blank and
/// comment lines. A fresh prompt is printed before every read, including
/// ones triggered mid-stream by an `open` block spanning multiple turns.
struct StdinSource<'a> {
    stdin: io::StdinLock<'a>,
}

impl<'a> StdinSource<'a> {
    fn new(stdin: io::StdinLock<'a>) -> Self {
        Self { stdin }
    }
}

impl CommandSource for StdinSource<'_> {
    fn next_command(&mut self) -> Result<Option<Command>, ScuttleError> {
        loop {
            print!("mi> ");
            io::stdout().flush()?;

            let mut line = String::new();
            let bytes_read = self.stdin.read_line(&mut line)?;
            if bytes_read == 0 {
                return Ok(None);
            }

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Ok(Some(parse::parse_line(trimmed)?));
        }
    }
}

/// Runs the REPL until end-of-input.
pub fn run_repl(quiet: bool, verbose: bool, sink: &mut dyn Sink) {
    if !quiet {
        println!("mi — an adventure-game-verb scripting language");
    }

    let inventory = inventory::default_inventory();
    let stdin = io::stdin();
    let mut source = StdinSource::new(stdin.lock());

    loop {
        let command = match source.next_command() {
            Ok(Some(command)) => command,
            Ok(None) => break,
            Err(err) => {
                eprintln!("error: {err}");
                continue;
            }
        };
        if verbose {
            eprintln!("{command:?}");
        }

        let outcome = dispatch::exec_command(&command, &inventory, &mut source, sink);
        match outcome {
            Ok(Flow::Normal) => {}
            Ok(Flow::Return(_)) => eprintln!("error: {}", ScuttleError::UncaughtReturn),
            Err(err) => eprintln!("error: {err}"),
        }
    }
}
