//! Interactive console entry point.
//!
//! # Responsibility
//! - Bootstrap logging (non-fatal on failure) and hand stdin/stdout to the
//!   core menu session.
//! - The only place that knows about real process streams.

use librarium_core::{default_log_level, init_logging, FlatFileStore, LibraryService};
use std::io::{self, BufReader};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = setup_logging() {
        // The catalog works without a logger; say so on stderr and move on.
        eprintln!("librarium: logging disabled: {err}");
    }

    let mut service = LibraryService::new(FlatFileStore::default());
    let stdin = io::stdin();
    let mut input = BufReader::new(stdin.lock());
    let mut out = io::stdout();

    match librarium_core::run_session(&mut input, &mut out, &mut service) {
        Ok(()) => ExitCode::SUCCESS,
        // A closed stdin ends the session the same way choice 6 does.
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("librarium: console I/O failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging() -> Result<(), String> {
    let log_dir = std::env::current_dir()
        .map_err(|err| format!("cannot resolve working directory: {err}"))?
        .join("logs");
    init_logging(default_log_level(), &log_dir)
}
