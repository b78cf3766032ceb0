//! Transaction entity - a single ledger entry

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::TransactionId;

/// Expense categories accepted by the ledger
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transportation",
    "Entertainment",
    "Utilities",
    "Healthcare",
    "Shopping",
    "Other",
];

/// Income categories accepted by the ledger
pub const INCOME_CATEGORIES: &[&str] = &["Salary", "Freelance", "Investment", "Gift", "Other"];

/// Direction of money flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    /// Categories valid for this kind
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            Self::Expense => EXPENSE_CATEGORIES,
            Self::Income => INCOME_CATEGORIES,
        }
    }

    /// Check a category name against this kind's fixed set
    pub fn validate_category(self, category: &str) -> Result<(), DomainError> {
        if self.categories().contains(&category) {
            Ok(())
        } else {
            Err(DomainError::InvalidCategory {
                kind: self,
                category: category.to_string(),
            })
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            other => Err(DomainError::ValidationError(format!(
                "Invalid transaction type: {other}"
            ))),
        }
    }
}

/// Ledger entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub kind: TransactionKind,
    pub date: NaiveDate,
}

/// Partial update of a transaction; the kind is fixed at creation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionChanges {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
}

impl Transaction {
    /// Maximum description length
    pub const MAX_DESCRIPTION_LENGTH: usize = 200;

    /// Largest storable amount, matching the `NUMERIC(14, 2)` column
    pub const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);

    /// Decimal places kept for an amount
    pub const AMOUNT_SCALE: u32 = 2;

    /// Create a validated transaction
    pub fn new(
        id: TransactionId,
        description: String,
        amount: Decimal,
        category: String,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Result<Self, DomainError> {
        validate_description(&description)?;
        validate_amount(amount)?;
        kind.validate_category(&category)?;

        Ok(Self {
            id,
            description,
            amount,
            category,
            kind,
            date,
        })
    }

    /// Apply a partial update
    ///
    /// Every provided field is validated before any is written, so a rejected
    /// update leaves the transaction untouched.
    pub fn apply(&mut self, changes: TransactionChanges) -> Result<(), DomainError> {
        if let Some(description) = &changes.description {
            validate_description(description)?;
        }
        if let Some(amount) = changes.amount {
            validate_amount(amount)?;
        }
        if let Some(category) = &changes.category {
            self.kind.validate_category(category)?;
        }

        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(amount) = changes.amount {
            self.amount = amount;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        Ok(())
    }
}

fn validate_amount(amount: Decimal) -> Result<(), DomainError> {
    let in_range = amount > Decimal::ZERO && amount <= Transaction::MAX_AMOUNT;
    if in_range && amount.normalize().scale() <= Transaction::AMOUNT_SCALE {
        Ok(())
    } else {
        Err(DomainError::InvalidAmount)
    }
}

fn validate_description(description: &str) -> Result<(), DomainError> {
    let len = description.trim().chars().count();
    if len == 0 {
        return Err(DomainError::ValidationError(
            "Description is required".to_string(),
        ));
    }
    if description.chars().count() > Transaction::MAX_DESCRIPTION_LENGTH {
        return Err(DomainError::ContentTooLong {
            max: Transaction::MAX_DESCRIPTION_LENGTH,
        });
    }
    Ok(())
}

/// Listing filter; every bound is optional and date bounds are inclusive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(category) = &self.category {
            if &tx.category != category {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if tx.kind != kind {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if tx.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if tx.date > end {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(amount: i64, category: &str, on: NaiveDate) -> Transaction {
        Transaction::new(
            TransactionId::generate(),
            "test".to_string(),
            Decimal::from(amount),
            category.to_string(),
            TransactionKind::Expense,
            on,
        )
        .unwrap()
    }

    #[test]
    fn test_category_sets() {
        assert!(TransactionKind::Expense.validate_category("Food").is_ok());
        assert!(TransactionKind::Income.validate_category("Salary").is_ok());
        assert!(TransactionKind::Income.validate_category("Food").is_err());
        assert!(TransactionKind::Expense.validate_category("Other").is_ok());
        assert!(TransactionKind::Income.validate_category("Other").is_ok());
    }

    #[test]
    fn test_new_rejects_non_positive_amount() {
        for amount in [Decimal::ZERO, Decimal::from(-5)] {
            let err = Transaction::new(
                TransactionId::generate(),
                "lunch".to_string(),
                amount,
                "Food".to_string(),
                TransactionKind::Expense,
                date(2024, 1, 1),
            )
            .unwrap_err();
            assert!(matches!(err, DomainError::InvalidAmount));
        }
    }

    #[test]
    fn test_amount_bounds() {
        let create = |amount: Decimal| {
            Transaction::new(
                TransactionId::generate(),
                "rent".to_string(),
                amount,
                "Utilities".to_string(),
                TransactionKind::Expense,
                date(2024, 1, 1),
            )
        };

        assert_eq!(Transaction::MAX_AMOUNT.to_string(), "999999999999.99");
        assert!(create(Transaction::MAX_AMOUNT).is_ok());
        assert!(create(Decimal::new(1, 2)).is_ok());
        // trailing zeros do not count towards the scale
        assert!(create(Decimal::new(10_500, 3)).is_ok());

        for amount in [
            Decimal::new(1, 4),
            Decimal::new(12_345, 3),
            Transaction::MAX_AMOUNT + Decimal::new(1, 2),
            Decimal::new(5, 0) * Decimal::new(10_i64.pow(18), 0) * Decimal::new(10_i64.pow(10), 0),
            Decimal::MAX,
        ] {
            let err = create(amount).unwrap_err();
            assert!(matches!(err, DomainError::InvalidAmount), "{amount}");
        }
    }

    #[test]
    fn test_apply_rejects_out_of_range_amount() {
        let mut tx = expense(10, "Food", date(2024, 1, 1));
        let err = tx
            .apply(TransactionChanges {
                amount: Some(Decimal::new(1, 4)),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidAmount));
        assert_eq!(tx.amount, Decimal::from(10));
    }

    #[test]
    fn test_new_rejects_blank_description() {
        let err = Transaction::new(
            TransactionId::generate(),
            "   ".to_string(),
            Decimal::ONE,
            "Food".to_string(),
            TransactionKind::Expense,
            date(2024, 1, 1),
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_apply_is_all_or_nothing() {
        let mut tx = expense(10, "Food", date(2024, 1, 1));
        let before = tx.clone();

        let err = tx
            .apply(TransactionChanges {
                description: Some("dinner".to_string()),
                amount: Some(Decimal::from(20)),
                category: Some("Salary".to_string()),
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidCategory { .. }));
        assert_eq!(tx, before);

        tx.apply(TransactionChanges {
            amount: Some(Decimal::new(1250, 2)),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(tx.amount, Decimal::new(1250, 2));
        assert_eq!(tx.description, "test");
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert!("refund".parse::<TransactionKind>().is_err());
        assert_eq!(
            serde_json::to_string(&TransactionKind::Expense).unwrap(),
            "\"expense\""
        );
    }

    #[test]
    fn test_filter_date_bounds_are_inclusive() {
        let tx = expense(10, "Food", date(2024, 3, 15));
        let filter = TransactionFilter {
            start_date: Some(date(2024, 3, 15)),
            end_date: Some(date(2024, 3, 15)),
            ..Default::default()
        };
        assert!(filter.matches(&tx));

        let filter = TransactionFilter {
            start_date: Some(date(2024, 3, 16)),
            ..Default::default()
        };
        assert!(!filter.matches(&tx));
    }

    #[test]
    fn test_filter_by_category_and_kind() {
        let tx = expense(10, "Food", date(2024, 3, 15));
        assert!(TransactionFilter::default().matches(&tx));
        assert!(!TransactionFilter {
            category: Some("Shopping".to_string()),
            ..Default::default()
        }
        .matches(&tx));
        assert!(!TransactionFilter {
            kind: Some(TransactionKind::Income),
            ..Default::default()
        }
        .matches(&tx));
    }
}
