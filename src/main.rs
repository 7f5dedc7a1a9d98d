//! charsheet - Command-line tool for generating the cast sprite sheets

use std::process::ExitCode;

use charsheet::cli;

fn main() -> ExitCode {
    cli::run()
}
