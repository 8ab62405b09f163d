//! Currencies quoted by the exchange-rate provider

use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum CurrencyCode {
    Usd,
    Rub,
    Eur,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 3] = [CurrencyCode::Usd, CurrencyCode::Rub, CurrencyCode::Eur];

    /// Three-letter ISO code, as used in the `valcode` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Rub => "RUB",
            CurrencyCode::Eur => "EUR",
        }
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(CurrencyCode::Usd),
            "RUB" => Ok(CurrencyCode::Rub),
            "EUR" => Ok(CurrencyCode::Eur),
            _ => Err(anyhow::anyhow!("Invalid currency code: {}", s)),
        }
    }
}
