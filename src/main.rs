//! Lexband - command-line tool for corpus frequency profiling

use std::process::ExitCode;

use lexband::cli;

fn main() -> ExitCode {
    cli::run()
}
