use std::time::Duration;

use crate::errors::DashboardError;
use crate::models::analysis::Period;
use crate::models::market::MarketInstrument;

/// Default number of recent transactions requested.
pub const DEFAULT_TRANSACTION_LIMIT: usize = 10;
/// Default HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime configuration for the dashboard.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the finance backend. `None` means not configured.
    pub backend_url: Option<String>,

    /// Currency used for amounts the backend does not tag (e.g., "INR", "USD").
    pub display_currency: String,

    pub transaction_limit: usize,

    pub request_timeout: Duration,

    /// Initial period of the financial summary.
    pub period: Period,

    /// Instruments shown in the market widget.
    pub market_instruments: Vec<MarketInstrument>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: None,
            display_currency: "INR".to_string(),
            transaction_limit: DEFAULT_TRANSACTION_LIMIT,
            request_timeout: DEFAULT_TIMEOUT,
            period: Period::Month,
            market_instruments: vec![
                MarketInstrument::Stock("TCS.BSE".to_string()),
                MarketInstrument::Crypto("bitcoin".to_string()),
            ],
        }
    }
}

impl Settings {
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = Some(url.into());
        self
    }

    /// Set the display currency. Must be exactly 3 ASCII letters.
    pub fn set_display_currency(&mut self, currency: &str) -> Result<(), DashboardError> {
        let trimmed = currency.trim().to_uppercase();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DashboardError::InvalidInput(format!(
                "Invalid currency code '{currency}': must be exactly 3 ASCII letters (e.g., INR, USD, EUR)"
            )));
        }
        self.display_currency = trimmed;
        Ok(())
    }

    /// The configured base URL without a trailing slash, or `MissingConfig`.
    pub fn base_url(&self) -> Result<&str, DashboardError> {
        match self.backend_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url.trim_end_matches('/')),
            _ => Err(DashboardError::MissingConfig),
        }
    }
}
