use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;

const ENV_FILTER: &str = "SPENDTRACK_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Where log records go for this run.
pub(crate) enum LogTarget<'a> {
    /// The interactive screen owns stdout/stderr, so records are appended to a file.
    File(&'a Path),
    Stderr,
}

pub(crate) fn init(target: LogTarget<'_>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::new().filter_or(ENV_FILTER, DEFAULT_FILTER));

    match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            builder
                .target(env_logger::Target::Pipe(Box::new(file)))
                .write_style(env_logger::WriteStyle::Never);
        }
        LogTarget::Stderr => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
    Ok(())
}
