use anyhow::bail;
use trainhub_shared::telemetry;

const APP_NAME: &str = "trainhub_cli";

pub fn init(cli: &super::cli::Cli, default_directive: &str) -> anyhow::Result<()> {
    let init_to_file = || -> anyhow::Result<()> {
        let (file, filename) = telemetry::create_trace_file(APP_NAME)?;
        let subscriber = telemetry::get_subscriber(APP_NAME.into(), default_directive, file);

        match telemetry::init_subscriber(subscriber) {
            Ok(_) => {
                eprintln!("Tracing started to file {filename:?}");
                Ok(())
            }
            Err(e) => {
                bail!("Failed to start tracing to file. Error: {e}");
            }
        }
    };

    if !cli.is_to_std_out {
        match init_to_file() {
            Ok(_) => return Ok(()),
            Err(e) => {
                // Fall through to logging to stdout
                eprintln!("Failed to start logging to file: {e}");
            }
        }
    }

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    match tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(_) => Ok(()),
        Err(e) => {
            bail!("Failed to start tracing. Error: {e}");
        }
    }
}
