use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::transaction::{
    DayGroup, Transaction, TransactionKind, TransactionQuery, TransactionSort,
};

/// Filter → sort → group-by-day pipeline behind the transaction list.
///
/// Pure logic over the fetched array. Never mutates or drops input beyond
/// what the filter excludes.
pub struct TransactionService;

impl TransactionService {
    pub fn new() -> Self {
        Self
    }

    /// Keep transactions matching every criterion set in `query`.
    pub fn filter<'a>(
        &self,
        transactions: &'a [Transaction],
        query: &TransactionQuery,
    ) -> Vec<&'a Transaction> {
        let category = query
            .category
            .as_deref()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty());
        let search = query
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        transactions
            .iter()
            .filter(|t| query.kind.map_or(true, |kind| t.kind() == kind))
            .filter(|t| {
                category
                    .as_deref()
                    .map_or(true, |c| t.category.trim().to_lowercase() == c)
            })
            .filter(|t| {
                search.as_deref().map_or(true, |needle| {
                    t.category.to_lowercase().contains(needle)
                        || t.description
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(needle))
                })
            })
            .collect()
    }

    /// Stable sort. Transactions without a parseable date go last for both date orders.
    pub fn sort<'a>(&self, transactions: Vec<&'a Transaction>, order: TransactionSort) -> Vec<&'a Transaction> {
        let mut keyed: Vec<(Option<NaiveDateTime>, &'a Transaction)> =
            transactions.into_iter().map(|t| (t.timestamp(), t)).collect();

        match order {
            TransactionSort::DateDesc => keyed.sort_by(|a, b| dated_first(a.0, b.0, |x, y| y.cmp(x))),
            TransactionSort::DateAsc => keyed.sort_by(|a, b| dated_first(a.0, b.0, |x, y| x.cmp(y))),
            TransactionSort::AmountDesc => keyed.sort_by(|a, b| b.1.amount.total_cmp(&a.1.amount)),
            TransactionSort::AmountAsc => keyed.sort_by(|a, b| a.1.amount.total_cmp(&b.1.amount)),
            TransactionSort::CategoryAsc => keyed.sort_by(|a, b| {
                a.1.category.to_lowercase().cmp(&b.1.category.to_lowercase())
            }),
        }

        keyed.into_iter().map(|(_, t)| t).collect()
    }

    /// Partition into one group per calendar day, in order of first appearance.
    ///
    /// Each input transaction lands in exactly one group, and order within a
    /// group follows the input order.
    pub fn group_by_day(&self, transactions: Vec<&Transaction>) -> Vec<DayGroup> {
        let mut groups: Vec<DayGroup> = Vec::new();
        let mut index: HashMap<Option<NaiveDate>, usize> = HashMap::new();

        for t in transactions {
            let day = t.day();
            let idx = *index.entry(day).or_insert_with(|| {
                groups.push(DayGroup {
                    day,
                    transactions: Vec::new(),
                    total_income: 0.0,
                    total_expense: 0.0,
                });
                groups.len() - 1
            });

            let group = &mut groups[idx];
            match t.kind() {
                TransactionKind::Income => group.total_income += t.amount,
                TransactionKind::Expense => group.total_expense += t.amount,
                TransactionKind::Other => {}
            }
            group.transactions.push(t.clone());
        }

        groups
    }

    /// Run the whole pipeline: filter, sort, then group by day.
    pub fn build_view(&self, transactions: &[Transaction], query: &TransactionQuery) -> Vec<DayGroup> {
        let filtered = self.filter(transactions, query);
        let sorted = self.sort(filtered, query.sort);
        self.group_by_day(sorted)
    }
}

impl Default for TransactionService {
    fn default() -> Self {
        Self::new()
    }
}

fn dated_first(
    a: Option<NaiveDateTime>,
    b: Option<NaiveDateTime>,
    cmp: impl Fn(&NaiveDateTime, &NaiveDateTime) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(&x, &y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
