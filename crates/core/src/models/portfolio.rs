use serde::{Deserialize, Serialize};

use super::de;

/// Broad class of a held asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Stock,
    Crypto,
    Other,
}

impl AssetKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "stock" => AssetKind::Stock,
            "crypto" => AssetKind::Crypto,
            _ => AssetKind::Other,
        }
    }

    /// Single-letter badge shown next to a holding.
    pub fn badge(&self) -> char {
        match self {
            AssetKind::Stock => 'S',
            AssetKind::Crypto => 'C',
            AssetKind::Other => '?',
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Stock => write!(f, "Stock"),
            AssetKind::Crypto => write!(f, "Crypto"),
            AssetKind::Other => write!(f, "Other"),
        }
    }
}

/// One position in the user's portfolio, from `GET /market/portfolio`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Holding {
    #[serde(default, deserialize_with = "de::null_default")]
    pub symbol: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "de::null_default")]
    pub asset_type: String,

    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub quantity: f64,

    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub current_value: f64,

    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub profit_loss: f64,

    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub profit_loss_percent: f64,
}

impl Holding {
    pub fn kind(&self) -> AssetKind {
        AssetKind::parse(&self.asset_type)
    }

    pub fn is_gain(&self) -> bool {
        self.profit_loss >= 0.0
    }

    /// Label for the row: the display name when present, otherwise the symbol.
    pub fn label(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.symbol,
        }
    }
}

/// Envelope for `GET /market/portfolio`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioResponse {
    #[serde(default, deserialize_with = "de::null_default")]
    pub portfolio: Vec<Holding>,
}

/// Aggregate figures shown above the holdings list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PortfolioTotals {
    pub total_value: f64,
    pub total_gain: f64,
}
