use anyhow::{Context, Result};
use std::fs::OpenOptions;

use crate::config::Config;

/// Where log records go. The interactive window owns the terminal, so it logs to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    File,
    Stderr,
}

pub fn init(config: &Config, target: Target) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&config.log_filter);

    if target == Target::File {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)
            .with_context(|| format!("opening log file {}", config.log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}
