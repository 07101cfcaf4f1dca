//! Lang case generator CLI.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use lang_casegen::cli::Cli;
use lang_casegen::{generate, init_tracing};

fn main() -> ExitCode {
    init_tracing();

    let config = Cli::parse().into_config();
    if !config.has_work() {
        eprintln!("nothing to generate");
        eprintln!("Pass --generate-files, --print-tests, --print-benches or --print-manifest.");
        eprintln!("Run `lang-casegen --help` for all options.");
        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match generate(&config, &mut out) {
        Ok(Some(report)) => {
            eprintln!(
                "wrote {} fixture files to {}",
                report.written.len(),
                report.dir.display()
            );
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
