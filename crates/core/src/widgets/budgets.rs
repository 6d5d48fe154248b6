use crate::backend::traits::DashboardBackend;
use crate::formatters::{format_currency, format_number};
use crate::models::budget::Budget;

use super::{banner, progress_bar, skeleton, RenderContext, Widget, WidgetState};

pub const TITLE: &str = "Budget Overview";
pub const EMPTY_MESSAGE: &str = "No budgets yet. Create a budget to start tracking your spending.";

/// Month-to-date spend against each category budget.
#[derive(Debug, Clone, Default)]
pub struct BudgetOverview {
    state: WidgetState<Vec<Budget>>,
}

impl BudgetOverview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WidgetState<Vec<Budget>> {
        &self.state
    }

    pub async fn load(&mut self, backend: &dyn DashboardBackend) {
        self.state = WidgetState::Loading;
        self.state = WidgetState::resolve(backend.budgets().await, Vec::is_empty, |e| {
            tracing::error!(error = %e, "error fetching budgets");
            format!("Error loading budgets: {e}")
        });
    }
}

impl Widget for BudgetOverview {
    fn title(&self) -> &str {
        TITLE
    }

    fn render(&self, ctx: &RenderContext) -> Vec<String> {
        match &self.state {
            WidgetState::Loading => skeleton(3),
            WidgetState::Failed(msg) => banner(msg),
            WidgetState::Empty => vec![EMPTY_MESSAGE.to_string()],
            WidgetState::Ready(budgets) => budgets
                .iter()
                .flat_map(|b| {
                    [
                        format!(
                            "{}  {} / {}",
                            b.category,
                            format_currency(Some(b.spent), &ctx.currency),
                            format_currency(Some(b.total_budget), &ctx.currency),
                        ),
                        format!(
                            "  {} {}%  {} · {}",
                            progress_bar(b.bar_width()),
                            format_number(Some(b.percentage_used), 0),
                            b.status(),
                            remaining_label(b, &ctx.currency),
                        ),
                    ]
                })
                .collect(),
        }
    }
}

fn remaining_label(b: &Budget, currency: &str) -> String {
    let remaining = b.remaining();
    if remaining < 0.0 {
        format!("{} over", format_currency(Some(-remaining), currency))
    } else {
        format!("{} left", format_currency(Some(remaining), currency))
    }
}
