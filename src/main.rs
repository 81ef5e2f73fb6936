// src/main.rs
use std::env;
use dotenvy::dotenv;
use currency_converter::{cli, config::Config, logging};

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "convert" {
        logging::init(&config, logging::Target::Stderr)?;
        cli::command::run(&args[2..])?;
    } else {
        logging::init(&config, logging::Target::File)?;
        cli::run(&config)?;
    }
    Ok(())
}
