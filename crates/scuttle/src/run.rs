//! File-mode execution: stream commands from a source file into the
//! dispatcher against a fresh default inventory, front to back.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::dispatch;
use crate::error::ScuttleError;
use crate::flow::Flow;
use crate::inventory;
use crate::sink::Sink;
use crate::source::{CommandSource, LineSource};

/// Runs the program at `path` to completion.
///
/// # Errors
/// Returns [`ScuttleError::Io`] if the file can't be opened, or any error
/// raised while running the program.
pub fn run_file(path: &Path, verbose: bool, sink: &mut dyn Sink) -> Result<(), ScuttleError> {
    let file = File::open(path)?;
    run_reader(BufReader::new(file), verbose, sink)
}

/// Runs a program read line-by-line from `reader` to completion.
///
/// # Errors
/// Returns [`ScuttleError::UncaughtReturn`] if a shovel's return escapes the
/// whole program, or any error raised while running it.
pub fn run_reader(reader: impl BufRead, verbose: bool, sink: &mut dyn Sink) -> Result<(), ScuttleError> {
    let inventory = inventory::default_inventory();
    let mut source = LineSource::new(reader.lines());

    while let Some(command) = source.next_command()? {
        if verbose {
            eprintln!("{command:?}");
        }
        match dispatch::exec_command(&command, &inventory, &mut source, sink)? {
            Flow::Normal => {}
            Flow::Return(_) => return Err(ScuttleError::UncaughtReturn),
        }
    }
    Ok(())
}
