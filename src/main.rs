//! CLI entry point for the brickwork solver

use brickwork::io::cli::{Cli, FileProcessor};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);

    match processor.process() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // Allow print for reporting the failure to the user
            #[allow(clippy::print_stderr)]
            {
                eprintln!("Error: {error}");
            }
            ExitCode::FAILURE
        }
    }
}
