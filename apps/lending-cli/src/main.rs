//! # Lending Ledger Entry Point
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match lending_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "session aborted");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
