//! # Roster Console Entry Point
//!
//! ## Usage
//! ```bash
//! # Empty roster
//! cargo run -p roster-console
//!
//! # Seeded roster, verbose store logging
//! ROSTER_SEED=./roster.json RUST_LOG=roster_core=debug cargo run -p roster-console
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // Startup lives in lib.rs for testability
    match roster_console::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
