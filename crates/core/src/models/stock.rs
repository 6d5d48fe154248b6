use serde::{Deserialize, Serialize};

/// A row of the bundled stock feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub symbol: String,
    pub price: f64,
    /// Day change in percent.
    pub change: f64,
}

impl StockRecord {
    pub fn new(symbol: impl Into<String>, price: f64, change: f64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            change,
        }
    }
}
