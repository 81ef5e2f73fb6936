//! Fixed-rate conversion between US Dollar, Mexican Peso and Euro.
//!
//! Everything in here is pure: the UI builds a [`ConversionRequest`] from its
//! selection state and gets back a [`Conversion`] or a [`ConversionError`].

pub mod currency;
pub mod error;
pub mod money;
pub mod rate_table;
pub mod request;

pub use currency::Currency;
pub use error::{ConversionError, Result};
pub use money::{fmt_money, parse_amount};
pub use rate_table::RateTable;
pub use request::{Conversion, ConversionRequest};

use rust_decimal::Decimal;

/// Converts `amount` with the fixed rate table, at full precision.
pub fn convert(amount: Decimal, from: Currency, to: Currency) -> Result<Decimal> {
    RateTable::fixed().convert_amount(amount, from, to)
}
