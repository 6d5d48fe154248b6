use std::time::Duration;

use crate::errors::DashboardError;
use crate::models::stock::StockRecord;

/// Simulated network latency of the bundled feed.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Message returned when the feed has nothing to serve.
pub const NO_STOCK_DATA: &str = "No stock data available.";

/// Offline stock feed backed by a fixed list, with an artificial delay.
///
/// Stands in for a live quote source in demos and tests.
pub struct StockService {
    records: Vec<StockRecord>,
    delay: Duration,
}

impl StockService {
    /// Feed with the bundled records and the default delay.
    pub fn new() -> Self {
        Self::with_records(default_records(), DEFAULT_DELAY)
    }

    pub fn with_records(records: Vec<StockRecord>, delay: Duration) -> Self {
        Self { records, delay }
    }

    /// Resolve with the records after the delay; fails when the feed is empty.
    pub async fn fetch_stock_data(&self) -> Result<Vec<StockRecord>, DashboardError> {
        tokio::time::sleep(self.delay).await;
        if self.records.is_empty() {
            return Err(DashboardError::NoData(NO_STOCK_DATA.to_string()));
        }
        tracing::debug!(count = self.records.len(), "served bundled stock data");
        Ok(self.records.clone())
    }
}

impl Default for StockService {
    fn default() -> Self {
        Self::new()
    }
}

/// The bundled quotes.
pub fn default_records() -> Vec<StockRecord> {
    vec![
        StockRecord::new("AAPL", 150.25, 1.2),
        StockRecord::new("GOOGL", 2800.5, -0.5),
        StockRecord::new("AMZN", 3400.75, 2.1),
    ]
}
