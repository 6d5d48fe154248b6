use serde::{Deserialize, Serialize};

use super::de;

/// A price quote from `/market/stock/{symbol}`, `/market/crypto/{id}` or `/market/trending`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default, deserialize_with = "de::null_default")]
    pub symbol: String,

    /// Upstream APIs hand prices over as strings; both forms are accepted.
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub price: Option<f64>,

    #[serde(default, deserialize_with = "de::opt_f64")]
    pub change_percent: Option<f64>,
}

/// Envelope for `GET /market/trending`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendingResponse {
    #[serde(default, deserialize_with = "de::null_default")]
    pub trending: Vec<Quote>,
}

/// Which instrument a market widget row tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketInstrument {
    Stock(String),
    Crypto(String),
}

impl MarketInstrument {
    /// Path relative to the backend base URL.
    pub fn path(&self) -> String {
        match self {
            MarketInstrument::Stock(symbol) => format!("/market/stock/{symbol}"),
            MarketInstrument::Crypto(id) => format!("/market/crypto/{id}"),
        }
    }

    /// Quote currency used when formatting the price.
    pub fn currency(&self) -> &'static str {
        match self {
            MarketInstrument::Stock(_) => "INR",
            MarketInstrument::Crypto(_) => "USD",
        }
    }

    pub fn label(&self) -> String {
        match self {
            MarketInstrument::Stock(symbol) => format!("{symbol} Stock"),
            MarketInstrument::Crypto(id) => {
                let mut chars = id.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}
