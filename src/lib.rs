pub mod cli;
pub mod config;
pub mod conversion;
pub mod logging;
