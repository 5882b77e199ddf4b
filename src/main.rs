//! suggestedsites CLI
//!
//! Usage: suggestedsites [OPTIONS] --fallback <PATH> --android-package-name <NAME> --output <PATH> [INPUT]...

mod commands;

use std::process::ExitCode;

use clap::Parser;
use suggestedsites::presentation::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::generate::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            commands::generate::report_error(&cli, &err);
            ExitCode::from(1)
        }
    }
}
