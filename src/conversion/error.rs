use thiserror::Error;

use super::currency::Currency;

pub type Result<T> = std::result::Result<T, ConversionError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Input text is empty, not a number, or negative. Carries the raw input.
    #[error("Invalid amount '{0}': expected a non-negative number")]
    InvalidAmount(String),

    #[error("Currency '{0}' is not supported")]
    UnknownCurrency(String),

    /// The converted value does not fit in a `Decimal`.
    #[error("Amount {amount} is too large to convert from {from} to {to}")]
    Overflow { amount: String, from: Currency, to: Currency },

    #[error("No exchange rate from {from} to {to}")]
    MissingRate { from: Currency, to: Currency },
}
