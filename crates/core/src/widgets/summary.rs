use crate::backend::traits::DashboardBackend;
use crate::formatters::{format_currency, format_percentage};
use crate::models::analysis::{FinancialTotals, Period, SpendingAnalysis};
use crate::models::chart::ChartSeries;
use crate::services::chart_service::ChartService;
use crate::services::summary_service::SummaryService;

use super::{banner, skeleton, RenderContext, Widget, WidgetState};

pub const TITLE: &str = "Financial Summary";
pub const NO_SPENDING_MESSAGE: &str = "No spending data available";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialView {
    pub totals: FinancialTotals,
    pub spending: ChartSeries,
}

impl FinancialView {
    pub fn from_analysis(analysis: &SpendingAnalysis) -> Self {
        Self {
            totals: SummaryService::new().financial_totals(analysis),
            spending: ChartService::new().spending_by_category(analysis),
        }
    }
}

/// Income, expenses and savings cards with the top spending categories.
///
/// Always populated on success: with no spending the cards show zero and
/// the chart area says so.
#[derive(Debug, Clone, Default)]
pub struct FinancialSummary {
    period: Period,
    state: WidgetState<FinancialView>,
}

impl FinancialSummary {
    pub fn new(period: Period) -> Self {
        Self {
            period,
            state: WidgetState::Loading,
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn state(&self) -> &WidgetState<FinancialView> {
        &self.state
    }

    /// Switch the period. Returns `true` when it changed and the widget needs a reload.
    pub fn set_period(&mut self, period: Period) -> bool {
        if self.period == period {
            return false;
        }
        self.period = period;
        self.state = WidgetState::Loading;
        true
    }

    pub async fn load(&mut self, backend: &dyn DashboardBackend) {
        self.state = WidgetState::Loading;
        let result = backend
            .spending_analysis(self.period)
            .await
            .map(|analysis| FinancialView::from_analysis(&analysis));
        self.state = WidgetState::resolve(result, |_| false, |e| {
            tracing::error!(error = %e, period = %self.period, "error fetching financial summary");
            format!("Error loading financial summary: {e}")
        });
    }
}

impl Widget for FinancialSummary {
    fn title(&self) -> &str {
        TITLE
    }

    fn render(&self, ctx: &RenderContext) -> Vec<String> {
        match &self.state {
            WidgetState::Loading => skeleton(4),
            WidgetState::Failed(msg) => banner(msg),
            WidgetState::Empty => vec![NO_SPENDING_MESSAGE.to_string()],
            WidgetState::Ready(view) => {
                let money = |v: Option<f64>| format_currency(v, &ctx.currency);
                let mut lines = vec![
                    format!("Period: {}", self.period.label()),
                    format!("Income: {}", money(view.totals.income)),
                    format!("Expenses: {}", money(Some(view.totals.expenses))),
                    format!("Savings: {}", money(view.totals.savings)),
                    "Top Spending Categories".to_string(),
                ];
                if view.spending.is_empty() {
                    lines.push(format!("  {NO_SPENDING_MESSAGE}"));
                } else {
                    lines.extend(view.spending.points().zip(view.spending.shares()).map(
                        |((label, value), share)| {
                            format!(
                                "  {label}: {} ({})",
                                money(Some(value)),
                                format_percentage(Some(share), 1)
                            )
                        },
                    ));
                }
                lines
            }
        }
    }
}
