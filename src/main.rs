//! Solver Options - inspect the solver's option registry

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = solver_options::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
