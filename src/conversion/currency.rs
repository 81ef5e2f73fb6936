use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ConversionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Mxn,
    Eur,
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usd
    }
}

impl Currency {
    /// Presentation order of the radio rows.
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Mxn, Currency::Eur];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Mxn => "MXN",
            Self::Eur => "EUR",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Usd => "US Dollar",
            Self::Mxn => "Mexican Peso",
            Self::Eur => "Euro",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd | Self::Mxn => "$",
            Self::Eur => "€",
        }
    }

    /// Steps through `ALL`, wrapping at both ends.
    pub fn cycle(self, delta: i32) -> Self {
        let pos = Self::ALL.iter().position(|&c| c == self).unwrap_or(0);
        let len = Self::ALL.len() as i32;
        Self::ALL[(pos as i32 + delta).rem_euclid(len) as usize]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| code.eq_ignore_ascii_case(c.as_str()))
            .ok_or_else(|| ConversionError::UnknownCurrency(code.to_string()))
    }
}
