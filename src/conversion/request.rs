use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::error::{ConversionError, Result};
use super::money::{fmt_money, parse_amount};

/// One conversion asked for by the user. Built per action, then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub amount: Decimal,
    pub from: Currency,
    pub to: Currency,
}

impl ConversionRequest {
    pub fn new(amount: Decimal, from: Currency, to: Currency) -> Result<Self> {
        if amount < Decimal::ZERO {
            return Err(ConversionError::InvalidAmount(amount.to_string()));
        }
        Ok(Self { amount, from, to })
    }

    /// Validates raw input text before anything is converted.
    pub fn parse(input: &str, from: Currency, to: Currency) -> Result<Self> {
        Ok(Self {
            amount: parse_amount(input)?,
            from,
            to,
        })
    }
}

/// A request together with its full-precision result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Conversion {
    #[serde(flatten)]
    pub request: ConversionRequest,
    pub converted: Decimal,
}

impl Conversion {
    /// Text for the result dialog.
    pub fn summary(&self) -> String {
        format!(
            "{} to {}\n{} is equivalent to {}",
            self.request.from.name(),
            self.request.to.name(),
            fmt_money(&self.request.amount),
            fmt_money(&self.converted),
        )
    }

    /// Single line for terminal output, e.g. `100.00 USD = 1733.49 MXN`.
    pub fn one_line(&self) -> String {
        format!(
            "{} {} = {} {}",
            fmt_money(&self.request.amount),
            self.request.from,
            fmt_money(&self.converted),
            self.request.to,
        )
    }
}
