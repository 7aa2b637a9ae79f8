//! Morsel CLI

use std::{io, process::ExitCode};

use morsel_cli::{Cli, observability};
use tracing::error;

#[tokio::main]
#[expect(clippy::print_stderr, reason = "errors are reported to the terminal")]
async fn main() -> ExitCode {
    let cli = match Cli::load() {
        Ok(cli) => cli,
        Err(error) => error.exit(),
    };

    if let Err(error) = observability::init_subscriber(&cli.logging) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    let mut stdout = io::stdout().lock();

    match morsel_cli::run(&cli.api, cli.command, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("command failed: {error}");
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
