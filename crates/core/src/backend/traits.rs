use async_trait::async_trait;

use crate::errors::DashboardError;
use crate::models::analysis::{Period, SpendingAnalysis};
use crate::models::budget::Budget;
use crate::models::market::{MarketInstrument, Quote};
use crate::models::notification::Notification;
use crate::models::portfolio::Holding;
use crate::models::transaction::Transaction;

/// Everything the dashboard reads from the finance backend.
///
/// The HTTP client implements this against the real API; tests and demos
/// plug in their own implementation. Envelopes are already unwrapped:
/// a missing list comes back empty, a missing string comes back `""`.
#[async_trait]
pub trait DashboardBackend: Send + Sync {
    /// Human-readable name of this backend (for logs).
    fn name(&self) -> &str;

    /// `GET /transactions?limit=N`
    async fn recent_transactions(&self, limit: usize) -> Result<Vec<Transaction>, DashboardError>;

    /// `GET /ai/suggest`
    async fn ai_suggestion(&self) -> Result<String, DashboardError>;

    /// `GET /budgets`
    async fn budgets(&self) -> Result<Vec<Budget>, DashboardError>;

    /// `GET /market/stock/{symbol}` or `GET /market/crypto/{id}`
    async fn quote(&self, instrument: &MarketInstrument) -> Result<Quote, DashboardError>;

    /// `GET /market/trending`
    async fn trending(&self) -> Result<Vec<Quote>, DashboardError>;

    /// `GET /market/portfolio`
    async fn portfolio(&self) -> Result<Vec<Holding>, DashboardError>;

    /// `GET /transactions/analysis?period=`
    async fn spending_analysis(&self, period: Period) -> Result<SpendingAnalysis, DashboardError>;

    /// `GET /notifications`
    async fn notifications(&self) -> Result<Vec<Notification>, DashboardError>;
}
