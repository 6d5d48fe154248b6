use serde::{Deserialize, Serialize};

use super::de;

/// Percentage at which a budget is flagged as nearing its limit.
pub const APPROACHING_THRESHOLD: f64 = 80.0;
/// Percentage at which a budget is over its limit.
pub const OVER_THRESHOLD: f64 = 100.0;

/// Where a budget stands relative to its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    OnTrack,
    Approaching,
    Over,
}

impl BudgetStatus {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= OVER_THRESHOLD {
            BudgetStatus::Over
        } else if percentage >= APPROACHING_THRESHOLD {
            BudgetStatus::Approaching
        } else {
            BudgetStatus::OnTrack
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetStatus::OnTrack => write!(f, "On track"),
            BudgetStatus::Approaching => write!(f, "Approaching limit"),
            BudgetStatus::Over => write!(f, "Over budget"),
        }
    }
}

/// A category budget with its month-to-date spend, from `GET /budgets`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default, deserialize_with = "de::null_default")]
    pub category: String,

    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub spent: f64,

    /// The backend stores the limit as `amount`; the status view calls it `total_budget`.
    #[serde(default, alias = "amount", deserialize_with = "de::f64_or_zero")]
    pub total_budget: f64,

    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub percentage_used: f64,
}

impl Budget {
    pub fn status(&self) -> BudgetStatus {
        BudgetStatus::from_percentage(self.percentage_used)
    }

    /// Progress bar fill in percent, clamped to `[0, 100]`.
    pub fn bar_width(&self) -> f64 {
        if self.percentage_used.is_nan() {
            return 0.0;
        }
        self.percentage_used.clamp(0.0, OVER_THRESHOLD)
    }

    /// Amount left before hitting the limit (negative when over).
    pub fn remaining(&self) -> f64 {
        self.total_budget - self.spent
    }
}

/// Envelope for `GET /budgets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetsResponse {
    #[serde(default, deserialize_with = "de::null_default")]
    pub budgets: Vec<Budget>,
}
