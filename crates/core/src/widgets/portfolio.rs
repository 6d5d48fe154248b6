use crate::backend::traits::DashboardBackend;
use crate::formatters::{format_currency, format_percentage};
use crate::models::chart::ChartSeries;
use crate::models::portfolio::{Holding, PortfolioTotals};
use crate::services::chart_service::ChartService;
use crate::services::summary_service::SummaryService;

use super::{banner, skeleton, RenderContext, Widget, WidgetState};

pub const TITLE: &str = "Investment Portfolio";
pub const EMPTY_MESSAGE: &str = "No investments yet. Add an investment to track your portfolio.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioView {
    pub holdings: Vec<Holding>,
    pub totals: PortfolioTotals,
    pub allocation: ChartSeries,
}

/// Holdings with total value and gain.
#[derive(Debug, Clone, Default)]
pub struct PortfolioSummary {
    state: WidgetState<PortfolioView>,
}

impl PortfolioSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WidgetState<PortfolioView> {
        &self.state
    }

    pub async fn load(&mut self, backend: &dyn DashboardBackend) {
        self.state = WidgetState::Loading;
        let result = backend.portfolio().await.map(|holdings| PortfolioView {
            totals: SummaryService::new().portfolio_totals(&holdings),
            allocation: ChartService::new().portfolio_allocation(&holdings),
            holdings,
        });
        self.state = WidgetState::resolve(result, |v| v.holdings.is_empty(), |e| {
            tracing::error!(error = %e, "error fetching portfolio");
            format!("Error loading portfolio: {e}")
        });
    }
}

impl Widget for PortfolioSummary {
    fn title(&self) -> &str {
        TITLE
    }

    fn render(&self, ctx: &RenderContext) -> Vec<String> {
        match &self.state {
            WidgetState::Loading => skeleton(4),
            WidgetState::Failed(msg) => banner(msg),
            WidgetState::Empty => vec![EMPTY_MESSAGE.to_string()],
            WidgetState::Ready(view) => {
                let gain_sign = if view.totals.total_gain >= 0.0 { "+" } else { "" };
                let mut lines = vec![
                    format!(
                        "Total Value: {}",
                        format_currency(Some(view.totals.total_value), &ctx.currency)
                    ),
                    format!(
                        "Total Gain/Loss: {gain_sign}{}",
                        format_currency(Some(view.totals.total_gain), &ctx.currency)
                    ),
                ];
                lines.extend(view.holdings.iter().map(|h| holding_line(h, &ctx.currency)));
                lines
            }
        }
    }
}

fn holding_line(h: &Holding, currency: &str) -> String {
    let arrow = if h.is_gain() { "▲" } else { "▼" };
    format!(
        "[{}] {} {} {} {}",
        h.kind().badge(),
        h.label(),
        format_currency(Some(h.current_value), currency),
        arrow,
        format_percentage(Some(h.profit_loss_percent.abs()), 2)
    )
}
