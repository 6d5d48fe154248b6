use crate::backend::traits::DashboardBackend;
use crate::formatters::{format_currency, format_datetime, truncate_text, DateStyle};
use crate::models::transaction::{DayGroup, Transaction, TransactionKind, TransactionQuery};
use crate::services::transaction_service::TransactionService;

use super::{banner, skeleton, RenderContext, Widget, WidgetState};

pub const TITLE: &str = "Recent Transactions";
pub const EMPTY_MESSAGE: &str = "No transactions available.";
pub const ERROR_MESSAGE: &str = "Unable to load transactions. Please try again.";

const DESCRIPTION_LEN: usize = 40;

/// Recent transactions, grouped by day.
///
/// Keeps the fetched array so the query can change without a refetch.
#[derive(Debug, Clone)]
pub struct RecentTransactions {
    limit: usize,
    query: TransactionQuery,
    fetched: Vec<Transaction>,
    state: WidgetState<Vec<DayGroup>>,
}

impl RecentTransactions {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            query: TransactionQuery::default(),
            fetched: Vec::new(),
            state: WidgetState::Loading,
        }
    }

    pub fn with_query(mut self, query: TransactionQuery) -> Self {
        self.query = query;
        self
    }

    pub fn state(&self) -> &WidgetState<Vec<DayGroup>> {
        &self.state
    }

    pub fn query(&self) -> &TransactionQuery {
        &self.query
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub async fn load(&mut self, backend: &dyn DashboardBackend) {
        self.state = WidgetState::Loading;
        match backend.recent_transactions(self.limit).await {
            Ok(transactions) => {
                tracing::debug!(count = transactions.len(), "transactions loaded");
                self.fetched = transactions;
                self.rebuild();
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching transactions");
                self.fetched.clear();
                self.state = WidgetState::Failed(ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Swap the filter/sort and regroup the already fetched transactions.
    pub fn set_query(&mut self, query: TransactionQuery) {
        self.query = query;
        if !matches!(self.state, WidgetState::Loading | WidgetState::Failed(_)) {
            self.rebuild();
        }
    }

    fn rebuild(&mut self) {
        let groups = TransactionService::new().build_view(&self.fetched, &self.query);
        self.state = WidgetState::resolve(Ok(groups), Vec::is_empty, |_| String::new());
    }
}

impl Widget for RecentTransactions {
    fn title(&self) -> &str {
        TITLE
    }

    fn render(&self, ctx: &RenderContext) -> Vec<String> {
        match &self.state {
            WidgetState::Loading => skeleton(4),
            WidgetState::Failed(msg) => banner(msg),
            WidgetState::Empty => vec![EMPTY_MESSAGE.to_string()],
            WidgetState::Ready(groups) => {
                let mut lines = Vec::new();
                for group in groups {
                    let heading = group
                        .day
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                        .map(|dt| format_datetime(dt, DateStyle::Medium))
                        .unwrap_or_else(|| "Undated".to_string());
                    lines.push(heading);
                    for t in &group.transactions {
                        lines.push(transaction_line(t, &ctx.currency));
                    }
                }
                lines
            }
        }
    }
}

fn transaction_line(t: &Transaction, currency: &str) -> String {
    let sign = match t.kind() {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
        TransactionKind::Other => "",
    };
    let category = if t.category.is_empty() { "Uncategorized" } else { &t.category };
    let mut line = format!("  {category}: {sign}{}", format_currency(Some(t.amount), currency));
    if let Some(desc) = t.description.as_deref().filter(|d| !d.trim().is_empty()) {
        line.push_str(" · ");
        line.push_str(&truncate_text(desc.trim(), DESCRIPTION_LEN));
    }
    line
}
