use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::traits::DashboardBackend;
use crate::errors::DashboardError;
use crate::models::analysis::{Period, SpendingAnalysis};
use crate::models::budget::{Budget, BudgetsResponse};
use crate::models::market::{MarketInstrument, Quote, TrendingResponse};
use crate::models::notification::{Notification, NotificationsResponse};
use crate::models::portfolio::{Holding, PortfolioResponse};
use crate::models::settings::Settings;
use crate::models::suggestion::SuggestionResponse;
use crate::models::transaction::{Transaction, TransactionsResponse};
use crate::storage::session::Session;

/// Whether a request must carry the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    Required,
    /// Token is attached when present, but its absence is not an error.
    Optional,
}

/// REST client for the finance backend.
///
/// - **Base URL**: from [`Settings::backend_url`]; checked on every call so an
///   unconfigured dashboard still renders, each widget showing the error.
/// - **Auth**: `Authorization: Bearer <token>` from the read-only [`Session`].
/// - **Errors**: non-2xx → [`DashboardError::Http`], transport →
///   [`DashboardError::Network`], bad JSON → [`DashboardError::Deserialization`].
pub struct HttpBackend {
    client: Client,
    base_url: Option<String>,
    session: Session,
}

impl HttpBackend {
    /// Build the client with the configured timeout. Fails only when the TLS
    /// backend cannot be initialised.
    pub fn new(settings: &Settings, session: Session) -> Result<Self, DashboardError> {
        let client = Client::builder()
            .timeout(settings.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: settings.base_url().ok().map(str::to_string),
            session,
        })
    }

    /// Full URL for a backend path, or `MissingConfig`.
    pub fn url_for(&self, path: &str) -> Result<String, DashboardError> {
        let base = self
            .base_url
            .as_deref()
            .ok_or(DashboardError::MissingConfig)?;
        Ok(format!("{base}{path}"))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        what: &str,
        auth: Auth,
    ) -> Result<T, DashboardError> {
        let url = self.url_for(path)?;
        let token = self.session.token();
        if auth == Auth::Required && token.is_none() {
            return Err(DashboardError::NotAuthenticated);
        }

        tracing::debug!(endpoint = path, "GET");
        let mut request = self.client.get(&url).query(query);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let resp = request.send().await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(endpoint = path, status = status.as_u16(), "backend returned an error status");
            return Err(DashboardError::Http {
                endpoint: what.to_string(),
                status: status.as_u16(),
            });
        }

        resp.json::<T>().await.map_err(|e| {
            DashboardError::Deserialization(format!("Failed to parse {what}: {e}"))
        })
    }
}

#[async_trait]
impl DashboardBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn recent_transactions(&self, limit: usize) -> Result<Vec<Transaction>, DashboardError> {
        let resp: TransactionsResponse = self
            .get_json("/transactions", &[("limit", limit.to_string())], "transactions", Auth::Required)
            .await?;
        Ok(resp.transactions)
    }

    async fn ai_suggestion(&self) -> Result<String, DashboardError> {
        let resp: SuggestionResponse = self
            .get_json("/ai/suggest", &[], "AI suggestion", Auth::Required)
            .await?;
        Ok(resp.suggestion)
    }

    async fn budgets(&self) -> Result<Vec<Budget>, DashboardError> {
        let resp: BudgetsResponse = self
            .get_json("/budgets", &[], "budgets", Auth::Required)
            .await?;
        Ok(resp.budgets)
    }

    async fn quote(&self, instrument: &MarketInstrument) -> Result<Quote, DashboardError> {
        let mut quote: Quote = self
            .get_json(&instrument.path(), &[], "market data", Auth::Optional)
            .await?;
        if quote.symbol.is_empty() {
            quote.symbol = match instrument {
                MarketInstrument::Stock(s) | MarketInstrument::Crypto(s) => s.clone(),
            };
        }
        Ok(quote)
    }

    async fn trending(&self) -> Result<Vec<Quote>, DashboardError> {
        let resp: TrendingResponse = self
            .get_json("/market/trending", &[], "market data", Auth::Optional)
            .await?;
        Ok(resp.trending)
    }

    async fn portfolio(&self) -> Result<Vec<Holding>, DashboardError> {
        let resp: PortfolioResponse = self
            .get_json("/market/portfolio", &[], "portfolio data", Auth::Required)
            .await?;
        Ok(resp.portfolio)
    }

    async fn spending_analysis(&self, period: Period) -> Result<SpendingAnalysis, DashboardError> {
        self.get_json(
            "/transactions/analysis",
            &[("period", period.as_str().to_string())],
            "financial summary",
            Auth::Required,
        )
        .await
    }

    async fn notifications(&self) -> Result<Vec<Notification>, DashboardError> {
        let resp: NotificationsResponse = self
            .get_json("/notifications", &[], "notifications", Auth::Required)
            .await?;
        Ok(resp.notifications)
    }
}
