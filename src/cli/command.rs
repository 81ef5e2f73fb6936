//! `currency-converter convert <amount> <from> <to> [--json]`

use anyhow::{bail, Result};

use crate::conversion::{Conversion, ConversionRequest, Currency, RateTable};

pub const USAGE: &str = "usage: currency-converter convert <amount> <USD|MXN|EUR> <USD|MXN|EUR> [--json]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertArgs {
    pub amount: String,
    pub from: Currency,
    pub to: Currency,
    pub json: bool,
}

/// Parses the arguments after `convert`. The amount is kept raw so the
/// conversion layer reports it as `InvalidAmount`.
pub fn parse_args(args: &[String]) -> Result<ConvertArgs> {
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|a| *a != "--json")
        .collect();

    let [amount, from, to] = positional.as_slice() else {
        bail!("expected 3 arguments, got {}\n{USAGE}", positional.len());
    };

    Ok(ConvertArgs {
        amount: amount.to_string(),
        from: from.parse()?,
        to: to.parse()?,
        json,
    })
}

pub fn convert(args: &ConvertArgs) -> Result<Conversion> {
    let request = ConversionRequest::parse(&args.amount, args.from, args.to)?;
    Ok(RateTable::fixed().convert(&request)?)
}

pub fn render(conv: &Conversion, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(conv)?)
    } else {
        Ok(conv.one_line())
    }
}

pub fn run(args: &[String]) -> Result<()> {
    let args = parse_args(args)?;
    let conv = match convert(&args) {
        Ok(conv) => conv,
        Err(e) => {
            log::warn!("one-shot conversion rejected: {e}");
            return Err(e);
        }
    };
    log::info!("converted {}", conv.one_line());
    println!("{}", render(&conv, args.json)?);
    Ok(())
}
