use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::OnceLock;

use super::currency::Currency;
use super::error::{ConversionError, Result};
use super::request::{Conversion, ConversionRequest};

/// Fixed multipliers, one direction per pair. The reverse direction is derived.
fn fixed_rates() -> [(Currency, Currency, Decimal); 3] {
    [
        (Currency::Mxn, Currency::Usd, Decimal::new(57_687, 6)),
        (Currency::Usd, Currency::Eur, Decimal::new(920_693, 6)),
        (Currency::Mxn, Currency::Eur, Decimal::new(53_094, 6)),
    ]
}

static FIXED: OnceLock<RateTable> = OnceLock::new();

/// Immutable `(from, to) -> multiplier` table.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<(Currency, Currency), Decimal>,
}

impl RateTable {
    /// The process-wide table of hard-coded rates.
    pub fn fixed() -> &'static RateTable {
        FIXED.get_or_init(|| Self::from_rates(fixed_rates()))
    }

    /// Builds a table from stored directions. Identity pairs and zero rates are skipped.
    pub fn from_rates(rates: impl IntoIterator<Item = (Currency, Currency, Decimal)>) -> Self {
        let rates = rates
            .into_iter()
            .filter(|(from, to, rate)| from != to && !rate.is_zero())
            .map(|(from, to, rate)| ((from, to), rate))
            .collect();
        Self { rates }
    }

    /// Multiplier for `from -> to`. Identity is 1; a missing direction is the
    /// inverse of the stored reverse pair.
    pub fn rate(&self, from: Currency, to: Currency) -> Option<Decimal> {
        if from == to {
            return Some(Decimal::ONE);
        }
        if let Some(rate) = self.rates.get(&(from, to)) {
            return Some(*rate);
        }
        self.rates.get(&(to, from)).map(|rate| Decimal::ONE / *rate)
    }

    pub fn convert_amount(&self, amount: Decimal, from: Currency, to: Currency) -> Result<Decimal> {
        if from == to {
            return Ok(amount);
        }
        let rate = self
            .rate(from, to)
            .ok_or(ConversionError::MissingRate { from, to })?;
        amount
            .checked_mul(rate)
            .ok_or_else(|| ConversionError::Overflow { amount: amount.to_string(), from, to })
    }

    pub fn convert(&self, request: &ConversionRequest) -> Result<Conversion> {
        let converted = self.convert_amount(request.amount, request.from, request.to)?;
        Ok(Conversion {
            request: *request,
            converted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn fixed_constants_are_exact() {
        let table = RateTable::fixed();
        assert_eq!(table.rate(Currency::Mxn, Currency::Usd), Some(dec!(0.057687)));
        assert_eq!(table.rate(Currency::Usd, Currency::Eur), Some(dec!(0.920693)));
        assert_eq!(table.rate(Currency::Mxn, Currency::Eur), Some(dec!(0.053094)));
    }

    #[test]
    fn reverse_direction_is_inverse() {
        let table = RateTable::fixed();
        assert_eq!(
            table.rate(Currency::Usd, Currency::Mxn),
            Some(Decimal::ONE / dec!(0.057687))
        );
        assert_eq!(
            table.rate(Currency::Eur, Currency::Usd),
            Some(Decimal::ONE / dec!(0.920693))
        );
        assert_eq!(
            table.rate(Currency::Eur, Currency::Mxn),
            Some(Decimal::ONE / dec!(0.053094))
        );
    }

    #[test]
    fn covers_every_ordered_pair() {
        let table = RateTable::fixed();
        for from in Currency::ALL {
            for to in Currency::ALL {
                let rate = table.rate(from, to).unwrap();
                assert!(rate > Decimal::ZERO, "{from}->{to}");
            }
        }
    }

    #[test]
    fn identity_skips_lookup() {
        let empty = RateTable::from_rates([]);
        assert_eq!(
            empty.convert_amount(dec!(42.5), Currency::Eur, Currency::Eur),
            Ok(dec!(42.5))
        );
    }

    #[test]
    fn missing_pair_is_reported() {
        let partial = RateTable::from_rates([(Currency::Usd, Currency::Eur, dec!(0.9))]);
        assert_eq!(
            partial.convert_amount(dec!(1), Currency::Mxn, Currency::Eur),
            Err(ConversionError::MissingRate {
                from: Currency::Mxn,
                to: Currency::Eur
            })
        );
    }

    #[test]
    fn largest_amount_overflows_only_when_rate_exceeds_one() {
        let table = RateTable::fixed();
        for from in Currency::ALL {
            for to in Currency::ALL {
                let rate = table.rate(from, to).unwrap();
                let out = table.convert_amount(Decimal::MAX, from, to);
                if rate > Decimal::ONE {
                    assert_eq!(
                        out,
                        Err(ConversionError::Overflow { amount: Decimal::MAX.to_string(), from, to }),
                        "{from}->{to}"
                    );
                } else {
                    let v = out.unwrap();
                    assert!(v > Decimal::ZERO && v <= Decimal::MAX, "{from}->{to}");
                }
            }
        }
    }

    #[test]
    fn zero_rates_are_not_stored() {
        let table = RateTable::from_rates([(Currency::Usd, Currency::Eur, Decimal::ZERO)]);
        assert_eq!(table.rate(Currency::Eur, Currency::Usd), None);
    }
}
