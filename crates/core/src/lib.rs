pub mod backend;
pub mod errors;
pub mod formatters;
pub mod models;
pub mod services;
pub mod storage;
pub mod widgets;

use std::sync::Arc;

use chrono::NaiveDateTime;
use tokio::task::JoinHandle;

use backend::http::HttpBackend;
use backend::traits::DashboardBackend;
use errors::DashboardError;
use models::analysis::Period;
use models::settings::Settings;
use models::transaction::TransactionQuery;
use storage::session::Session;
use widgets::budgets::BudgetOverview;
use widgets::market::MarketPrices;
use widgets::notifications::NotificationCenter;
use widgets::portfolio::PortfolioSummary;
use widgets::suggestion::AiSuggestion;
use widgets::summary::FinancialSummary;
use widgets::transactions::RecentTransactions;
use widgets::{RenderContext, Widget};

/// Banner shown above all widgets when no backend URL is configured.
pub const MISSING_BACKEND_BANNER: &str = "Backend URL is not configured. Please contact support.";

/// All widgets of the dashboard page.
///
/// Widgets are independent: loading them concurrently has no ordering
/// requirement and one failing leaves the others untouched.
#[derive(Debug, Clone)]
pub struct Widgets {
    pub summary: FinancialSummary,
    pub suggestion: AiSuggestion,
    pub budgets: BudgetOverview,
    pub market: MarketPrices,
    pub transactions: RecentTransactions,
    pub portfolio: PortfolioSummary,
    pub notifications: NotificationCenter,
}

impl Widgets {
    pub fn new(settings: &Settings) -> Self {
        Self {
            summary: FinancialSummary::new(settings.period),
            suggestion: AiSuggestion::new(),
            budgets: BudgetOverview::new(),
            market: MarketPrices::new(settings.market_instruments.clone()),
            transactions: RecentTransactions::new(settings.transaction_limit),
            portfolio: PortfolioSummary::new(),
            notifications: NotificationCenter::new(),
        }
    }

    /// Fetch every widget concurrently.
    pub async fn load_all(&mut self, backend: &dyn DashboardBackend) {
        tokio::join!(
            self.summary.load(backend),
            self.suggestion.load(backend),
            self.budgets.load(backend),
            self.market.load(backend),
            self.transactions.load(backend),
            self.portfolio.load(backend),
            self.notifications.load(backend),
        );
    }

    /// Panels in page order: notifications, summary + suggestion, budgets + market,
    /// transactions + portfolio.
    pub fn panels(&self) -> [&dyn Widget; 7] {
        [
            &self.notifications,
            &self.summary,
            &self.suggestion,
            &self.budgets,
            &self.market,
            &self.transactions,
            &self.portfolio,
        ]
    }
}

/// A refresh running in the background.
///
/// Dropping it aborts the in-flight requests, so a dashboard that goes away
/// never receives late results.
#[must_use]
pub struct RefreshTask {
    handle: Option<JoinHandle<Widgets>>,
}

impl RefreshTask {
    /// Wait for the refresh to finish.
    pub async fn join(mut self) -> Result<Widgets, DashboardError> {
        let handle = self.handle.take().ok_or(DashboardError::Cancelled)?;
        handle.await.map_err(|e| {
            if !e.is_cancelled() {
                tracing::error!(error = %e, "refresh task failed");
            }
            DashboardError::Cancelled
        })
    }

    /// Abort the refresh now.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Main entry point: the dashboard page.
/// Holds the backend, the read-only session view and every widget.
#[must_use]
pub struct Dashboard {
    backend: Arc<dyn DashboardBackend>,
    settings: Settings,
    greeting_name: Option<String>,
    authenticated: bool,
    widgets: Widgets,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("backend", &self.backend.name())
            .field("settings", &self.settings)
            .field("authenticated", &self.authenticated)
            .finish()
    }
}

impl Dashboard {
    /// Dashboard over the HTTP backend described by `settings`.
    pub fn connect(settings: Settings, session: Session) -> Result<Self, DashboardError> {
        let backend = HttpBackend::new(&settings, session.clone())?;
        Ok(Self::with_backend(Arc::new(backend), settings, &session))
    }

    /// Dashboard over any backend (mocks, demos).
    pub fn with_backend(
        backend: Arc<dyn DashboardBackend>,
        settings: Settings,
        session: &Session,
    ) -> Self {
        let widgets = Widgets::new(&settings);
        Self {
            backend,
            greeting_name: session.display_name(),
            authenticated: session.is_authenticated(),
            settings,
            widgets,
        }
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Fetch every widget and wait for all of them.
    pub async fn refresh(&mut self) {
        if let Some(banner) = self.general_error() {
            tracing::warn!("{banner}");
        }
        tracing::info!(backend = self.backend.name(), "refreshing dashboard");
        self.widgets.load_all(self.backend.as_ref()).await;
    }

    /// Start a refresh on the runtime and return immediately.
    ///
    /// The task loads a fresh copy of the widgets (keeping the current
    /// transaction query and period); hand the result to [`Dashboard::apply`].
    pub fn spawn_refresh(&self) -> RefreshTask {
        let backend = Arc::clone(&self.backend);
        let mut widgets = Widgets::new(&self.settings);
        widgets.summary = FinancialSummary::new(self.widgets.summary.period());
        widgets.transactions = widgets
            .transactions
            .with_query(self.widgets.transactions.query().clone());

        let handle = tokio::spawn(async move {
            widgets.load_all(backend.as_ref()).await;
            widgets
        });
        RefreshTask {
            handle: Some(handle),
        }
    }

    /// Install widgets produced by [`Dashboard::spawn_refresh`].
    /// The notification dropdown keeps its open/closed state.
    pub fn apply(&mut self, mut widgets: Widgets) {
        if self.widgets.notifications.is_open() && !widgets.notifications.is_open() {
            widgets.notifications.toggle();
        }
        self.widgets = widgets;
    }

    /// Refetch only the transaction list.
    pub async fn refresh_transactions(&mut self) {
        self.widgets.transactions.load(self.backend.as_ref()).await;
    }

    /// Change the financial summary period, refetching only that widget.
    pub async fn set_period(&mut self, period: Period) {
        if self.widgets.summary.set_period(period) {
            tracing::debug!(%period, "period changed");
            self.widgets.summary.load(self.backend.as_ref()).await;
        }
    }

    /// Change the transaction filter/sort. No refetch needed.
    pub fn set_transaction_query(&mut self, query: TransactionQuery) {
        self.widgets.transactions.set_query(query);
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub fn widgets(&self) -> &Widgets {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut Widgets {
        &mut self.widgets
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Page-level banner, if any. Widgets still render their own errors.
    #[must_use]
    pub fn general_error(&self) -> Option<&'static str> {
        match self.settings.base_url() {
            Ok(_) => None,
            Err(_) => Some(MISSING_BACKEND_BANNER),
        }
    }

    #[must_use]
    pub fn greeting(&self) -> String {
        match &self.greeting_name {
            Some(name) => format!("Welcome back, {name}! Here's your financial overview."),
            None => "Welcome back! Here's your financial overview.".to_string(),
        }
    }

    // ── Rendering ───────────────────────────────────────────────────

    /// Render the whole page as text panels.
    #[must_use]
    pub fn render(&self, now: NaiveDateTime) -> String {
        let ctx = RenderContext::new(self.settings.display_currency.clone(), now);
        let mut out = String::new();
        out.push_str("Dashboard\n");
        out.push_str(&self.greeting());
        out.push('\n');
        if let Some(banner) = self.general_error() {
            out.push_str(&format!("✖ {banner}\n"));
        }
        for panel in self.widgets.panels() {
            out.push('\n');
            out.push_str(&render_panel(panel, &ctx));
        }
        out
    }
}

/// Title underlined, then the body lines.
pub fn render_panel(widget: &dyn Widget, ctx: &RenderContext) -> String {
    let title = widget.title();
    let mut out = format!("{title}\n{}\n", "─".repeat(title.chars().count()));
    for line in widget.render(ctx) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
