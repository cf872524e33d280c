use anyhow::Context;
use std::{
    fs::{create_dir_all, File},
    path::{Path, PathBuf},
};
use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Folder (relative to the working directory) that trace files are written to
pub const TRACE_FOLDER: &str = "traces";

/// Builds a bunyan JSON subscriber writing to `sink`.
///
/// `RUST_LOG` takes precedence over `default_env_filter_directive`. For the
/// accepted directives see <https://docs.rs/tracing-subscriber/0.3.19/tracing_subscriber/filter/struct.EnvFilter.html#directives>
pub fn get_subscriber<Sink, S>(
    name: String,
    default_env_filter_directive: S,
    sink: Sink,
) -> impl Subscriber + Sync + Send
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    S: AsRef<str>,
{
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_env_filter_directive));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Sets `subscriber` as the global default and redirects `log` records to it.
///
/// Fails if called more than once per process
pub fn init_subscriber(subscriber: impl Subscriber + Sync + Send) -> anyhow::Result<()> {
    LogTracer::init().context("failed to set logger")?;
    set_global_default(subscriber).context("failed to set subscriber")?;
    Ok(())
}

fn gen_log_filename(app_name: &str) -> String {
    format!(
        "{}_{app_name}.log",
        chrono::Local::now().format("%Y-%m-%dT%H-%M-%S")
    )
}

/// Creates a new timestamped trace file in `folder`, returning the open file
/// and its path
pub fn create_trace_file_in(folder: &Path, app_name: &str) -> anyhow::Result<(File, PathBuf)> {
    create_dir_all(folder)
        .with_context(|| format!("failed to create trace folder: {folder:?}"))?;
    let file_path = folder.join(gen_log_filename(app_name));
    let file = File::create(&file_path)
        .with_context(|| format!("failed to create trace file: {file_path:?}"))?;
    Ok((file, file_path))
}

/// [`create_trace_file_in`] using [`TRACE_FOLDER`]
pub fn create_trace_file(app_name: &str) -> anyhow::Result<(File, PathBuf)> {
    create_trace_file_in(Path::new(TRACE_FOLDER), app_name)
}
