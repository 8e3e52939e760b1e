//! Currencies supported by the wallet core.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A currency the wallet core can hold balances in.
///
/// The set is closed: currencies are compiled in and the subset a process
/// serves is fixed when the registry is built. On the wire a currency is
/// carried as its `i32` tag (see [`Currency::tag`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar, in cents.
    Usd,
    /// Bitcoin, in satoshis.
    Btc,
    /// Ethereum Classic, in wei.
    Etc,
}

impl Currency {
    /// Every currency, in wire tag order.
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Btc, Currency::Etc];

    /// Look up a currency by its wire tag.
    pub fn from_tag(tag: i32) -> Option<Self> {
        usize::try_from(tag)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// The wire tag of this currency.
    pub fn tag(&self) -> i32 {
        match self {
            Currency::Usd => 0,
            Currency::Btc => 1,
            Currency::Etc => 2,
        }
    }

    /// Get the currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Btc => "BTC",
            Currency::Etc => "ETC",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Returned when a string does not name a known currency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownCurrency(code.to_string()))
    }
}
