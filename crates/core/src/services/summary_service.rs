use crate::models::analysis::{FinancialTotals, SpendingAnalysis};
use crate::models::portfolio::{Holding, PortfolioTotals};

/// Aggregates shown on the summary cards.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Income / expenses / savings for the financial summary.
    ///
    /// Expenses are the sum of the top spending categories. Income is only
    /// known when the backend reports it; savings follow income.
    pub fn financial_totals(&self, analysis: &SpendingAnalysis) -> FinancialTotals {
        let expenses: f64 = analysis
            .top_spending_categories
            .iter()
            .map(|(_, amount)| *amount)
            .filter(|amount| amount.is_finite())
            .sum();
        let income = analysis.total_income.filter(|v| v.is_finite());

        FinancialTotals {
            income,
            expenses,
            savings: income.map(|i| i - expenses),
        }
    }

    /// Total value and total gain across holdings.
    pub fn portfolio_totals(&self, holdings: &[Holding]) -> PortfolioTotals {
        holdings.iter().fold(PortfolioTotals::default(), |acc, h| PortfolioTotals {
            total_value: acc.total_value + h.current_value,
            total_gain: acc.total_gain + h.profit_loss,
        })
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
