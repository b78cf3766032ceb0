//! Pure aggregation over ledger data

mod stats;

pub use stats::{CategoryTotal, ExpenseStats, MonthlyTotals};
