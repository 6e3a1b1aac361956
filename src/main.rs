//! hysteria-gen CLI.

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use hysteria_gen::cli::{self, GenerateArgs};

/// Exit status for `--strict` runs where a step degraded.
const EXIT_DEGRADED: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match GenerateArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // clap's own exit status would collide with EXIT_DEGRADED.
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };
    let strict = args.strict;

    match cli::run(args).await {
        Ok(report) if strict && report.is_degraded() => ExitCode::from(EXIT_DEGRADED),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
