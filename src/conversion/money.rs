use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use super::error::{ConversionError, Result};

/// Two fractional digits, half away from zero, always padded (`5.77`, `0.00`).
pub fn fmt_money(d: &Decimal) -> String {
    let mut rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Parses user input as a non-negative amount. Accepts plain decimals and
/// scientific notation; surrounding whitespace is ignored.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let trimmed = s.trim();
    // Decimal::from_str skips digit-group underscores
    if trimmed.contains('_') {
        return Err(ConversionError::InvalidAmount(s.to_string()));
    }
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ConversionError::InvalidAmount(s.to_string()))?;

    if amount < Decimal::ZERO {
        return Err(ConversionError::InvalidAmount(s.to_string()));
    }
    // "-0" parses with the sign bit set
    Ok(if amount.is_zero() { Decimal::ZERO } else { amount })
}
