//! Closed currency set.
//!
//! Amounts move through the system in exactly these currencies; the Dominican
//! peso is the reporting (base) currency everything converts into. Keeping
//! the set closed lets conversion pattern-match on the variant instead of
//! comparing currency-code strings.

use serde::{Deserialize, Serialize};

/// Supported currencies. [`Currency::Dop`] is the base currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Dominican peso (RD$) — the base/reporting currency.
    Dop,
    /// United States dollar.
    Usd,
    /// Euro.
    Eur,
    /// Chinese yuan.
    Cny,
}

impl Currency {
    /// Whether this is the base (reporting) currency.
    pub fn is_base(self) -> bool {
        matches!(self, Currency::Dop)
    }

    /// ISO 4217 code, for display and interchange.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Dop => "DOP",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Cny => "CNY",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}
