use crate::models::analysis::SpendingAnalysis;
use crate::models::chart::ChartSeries;
use crate::models::portfolio::Holding;

/// Maps fetched arrays into chart input series.
///
/// Only fetched values are charted; nothing is synthesised.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Doughnut input for the financial summary: one slice per top spending category.
    pub fn spending_by_category(&self, analysis: &SpendingAnalysis) -> ChartSeries {
        let (labels, values) = analysis
            .top_spending_categories
            .iter()
            .filter(|(_, amount)| amount.is_finite())
            .map(|(category, amount)| (category.clone(), *amount))
            .unzip();
        ChartSeries { labels, values }
    }

    /// Allocation by current value, largest first.
    pub fn portfolio_allocation(&self, holdings: &[Holding]) -> ChartSeries {
        let mut sorted: Vec<&Holding> = holdings.iter().collect();
        sorted.sort_by(|a, b| b.current_value.total_cmp(&a.current_value));
        let (labels, values) = sorted
            .into_iter()
            .map(|h| (h.symbol.clone(), h.current_value))
            .unzip();
        ChartSeries { labels, values }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
