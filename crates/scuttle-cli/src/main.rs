//! Thin CLI front-end: one optional positional source-file path, `--quiet`
//! / `-q` to suppress the REPL banner, `--verbose` / `-v` to echo each
//! dispatched command to stderr. The surface is two flags and a path,
//! parsed by hand rather than with an argument-parsing crate.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use scuttle::{run, StdoutSink};

struct Args {
    path: Option<PathBuf>,
    quiet: bool,
    verbose: bool,
}

fn parse_args(argv: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut path = None;
    let mut quiet = false;
    let mut verbose = false;

    for arg in argv {
        match arg.as_str() {
            "--quiet" | "-q" => quiet = true,
            "--verbose" | "-v" => verbose = true,
            other if path.is_none() => path = Some(PathBuf::from(other)),
            other => return Err(format!("unexpected argument: {other}")),
        }
    }

    Ok(Args {
        path,
        quiet,
        verbose,
    })
}

fn main() -> ExitCode {
    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut sink = StdoutSink;

    match args.path {
        Some(path) => match run::run_file(&path, args.verbose, &mut sink) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
        None => {
            scuttle::repl::run_repl(args.quiet, args.verbose, &mut sink);
            ExitCode::SUCCESS
        }
    }
}
