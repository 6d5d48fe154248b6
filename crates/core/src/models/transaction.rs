use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::de;
use crate::formatters::parse_datetime;

/// Direction of money flow, derived from the backend's `transaction_type` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
    /// Missing or unrecognised `transaction_type`.
    Other,
}

impl TransactionKind {
    /// Case-insensitive parse of the backend's type string.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "income" => TransactionKind::Income,
            "expense" => TransactionKind::Expense,
            _ => TransactionKind::Other,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
            TransactionKind::Other => write!(f, "other"),
        }
    }
}

/// Sort order for transaction listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransactionSort {
    /// Newest first (default for display)
    #[default]
    DateDesc,
    /// Oldest first
    DateAsc,
    /// Largest amount first
    AmountDesc,
    /// Smallest amount first
    AmountAsc,
    /// Alphabetical by category
    CategoryAsc,
}

/// A single transaction as returned by `GET /transactions`.
///
/// Every field is optional on the wire; missing values fall back to empty/zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "de::null_default")]
    pub category: String,

    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub amount: f64,

    /// Raw date string as sent by the backend (ISO 8601 in practice).
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub transaction_type: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        self.transaction_type
            .as_deref()
            .map(TransactionKind::parse)
            .unwrap_or(TransactionKind::Other)
    }

    /// Parsed timestamp, `None` when the date is missing or unparseable.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(parse_datetime)
    }

    /// Calendar day of the transaction.
    pub fn day(&self) -> Option<NaiveDate> {
        self.timestamp().map(|ts| ts.date())
    }
}

/// Envelope for `GET /transactions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default, deserialize_with = "de::null_default")]
    pub transactions: Vec<Transaction>,
}

/// Filter applied before sorting and grouping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionQuery {
    pub kind: Option<TransactionKind>,
    /// Exact category match, case-insensitive.
    pub category: Option<String>,
    /// Substring match over category and description, case-insensitive.
    pub search: Option<String>,
    pub sort: TransactionSort,
}

/// One calendar day of transactions, in the order produced by the sort.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup {
    /// `None` collects transactions whose date could not be parsed.
    pub day: Option<NaiveDate>,
    pub transactions: Vec<Transaction>,
    pub total_income: f64,
    pub total_expense: f64,
}
