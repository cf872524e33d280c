use std::process::ExitCode;

use clap::Parser;
use trainhub_cli::{cli::Cli, configuration::get_configuration};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    let configuration = match get_configuration() {
        Ok(configuration) => configuration,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = trainhub_cli::tracing::init(&args, &configuration.logging.default_directive) {
        eprintln!("Failed to start tracing: {e}");
    }

    match trainhub_cli::run(args.command, &configuration).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(?e, "command failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
