use gfget_core::logging;

mod cli;

use crate::cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse before touching logging or the network: usage errors have no side effects.
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    let subscriber = logging::stdout_subscriber();
    tracing::subscriber::with_default(subscriber, || match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::from(cli::exit_code(&err))
        }
    })
}
