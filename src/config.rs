//! Start-up settings read from the environment (and `.env`, loaded in `main`).

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::conversion::Currency;

pub const DEFAULT_LOG_FILE: &str = "currency_converter.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub default_from: Currency,
    pub default_to: Currency,
    pub log_file: PathBuf,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_from: Currency::Usd,
            default_to: Currency::Mxn,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(code) = get("CONVERTER_FROM") {
            config.default_from = code
                .parse()
                .with_context(|| format!("CONVERTER_FROM={code}"))?;
        }
        if let Some(code) = get("CONVERTER_TO") {
            config.default_to = code
                .parse()
                .with_context(|| format!("CONVERTER_TO={code}"))?;
        }
        if let Some(path) = get("CONVERTER_LOG") {
            config.log_file = PathBuf::from(path);
        }
        if let Some(filter) = get("RUST_LOG") {
            config.log_filter = filter;
        }
        Ok(config)
    }
}
