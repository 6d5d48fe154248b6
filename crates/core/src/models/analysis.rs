use serde::{Deserialize, Serialize};

use super::de;
use crate::errors::DashboardError;

/// Reporting window for `GET /transactions/analysis?period=`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    #[default]
    Month,
    Year,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    /// Label shown in the period selector.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Week => "This Week",
            Period::Month => "This Month",
            Period::Year => "This Year",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Period {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            other => Err(DashboardError::InvalidInput(format!(
                "Unknown period '{other}': expected week, month or year"
            ))),
        }
    }
}

/// Spending breakdown from `GET /transactions/analysis`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpendingAnalysis {
    /// `[category, amount]` pairs, largest first.
    #[serde(default, deserialize_with = "de::null_default")]
    pub top_spending_categories: Vec<(String, f64)>,

    /// Passed through as-is; its shape is owned by the backend.
    #[serde(default)]
    pub monthly_spending: serde_json::Value,

    /// Income for the period, when the backend reports it.
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub total_income: Option<f64>,
}

/// Income / expenses / savings cards of the financial summary.
///
/// `income` and `savings` stay `None` unless the backend reports income.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FinancialTotals {
    pub income: Option<f64>,
    pub expenses: f64,
    pub savings: Option<f64>,
}
