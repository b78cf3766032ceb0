//! Ledger statistics, recomputed from the full transaction set on each read

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::entities::{Transaction, TransactionKind};
use crate::value_objects::MonthKey;

/// Income and expense sums for one month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthlyTotals {
    pub income: Decimal,
    pub expenses: Decimal,
}

/// One row of the expense ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

/// Aggregated view over a set of transactions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseStats {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub expenses_by_category: HashMap<String, Decimal>,
    /// Expense totals by descending amount; ties keep first-seen order
    pub category_ranking: Vec<CategoryTotal>,
    pub monthly_data: BTreeMap<MonthKey, MonthlyTotals>,
    pub total_transactions: usize,
}

impl ExpenseStats {
    /// Compute statistics over `transactions`
    ///
    /// Sums saturate at the `Decimal` bounds instead of overflowing.
    pub fn compute<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut stats = Self::default();
        let mut first_seen: Vec<String> = Vec::new();

        for tx in transactions {
            stats.total_transactions += 1;
            let month = stats.monthly_data.entry(MonthKey::of(tx.date)).or_default();

            match tx.kind {
                TransactionKind::Income => {
                    stats.total_income = stats.total_income.saturating_add(tx.amount);
                    month.income = month.income.saturating_add(tx.amount);
                }
                TransactionKind::Expense => {
                    stats.total_expenses = stats.total_expenses.saturating_add(tx.amount);
                    month.expenses = month.expenses.saturating_add(tx.amount);

                    let slot = stats
                        .expenses_by_category
                        .entry(tx.category.clone())
                        .or_insert_with(|| {
                            first_seen.push(tx.category.clone());
                            Decimal::ZERO
                        });
                    *slot = slot.saturating_add(tx.amount);
                }
            }
        }

        stats.balance = stats.total_income.saturating_sub(stats.total_expenses);

        let mut ranking: Vec<CategoryTotal> = first_seen
            .into_iter()
            .map(|category| {
                let amount = stats.expenses_by_category[&category];
                CategoryTotal { category, amount }
            })
            .collect();
        // stable sort keeps first-seen order among equal amounts
        ranking.sort_by(|a, b| b.amount.cmp(&a.amount));
        stats.category_ranking = ranking;

        stats
    }
}
