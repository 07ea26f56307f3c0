//! Bookshelf - personal book catalog

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = bookshelf::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
