//! Domain types for recorded income and expense entries.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Description and category used for the primary income entry.
pub const MONTHLY_INCOME: &str = "Monthly Income";
/// Category assigned to every additional income entry.
pub const EXTRA_INCOME: &str = "Extra Income";

/// Which collection flow produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    PrimaryIncome,
    AdditionalIncome,
    Expense,
}

impl EntryKind {
    /// Table the finished entry is appended to.
    pub fn table(self) -> Table {
        match self {
            EntryKind::PrimaryIncome | EntryKind::AdditionalIncome => Table::Income,
            EntryKind::Expense => Table::Expenses,
        }
    }

    pub fn is_expense(self) -> bool {
        matches!(self, EntryKind::Expense)
    }

    /// Whether the user writes the description (and is held to its length limit).
    pub fn prompts_description(self) -> bool {
        !matches!(self, EntryKind::PrimaryIncome)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::PrimaryIncome => "monthly income",
            EntryKind::AdditionalIncome => "additional income",
            EntryKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

/// Logical append-only tables of the row store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Table {
    Income,
    Expenses,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Income => f.write_str("income"),
            Table::Expenses => f.write_str("expenses"),
        }
    }
}

/// One recorded financial transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    /// Post-tax value, never negative.
    pub amount: f64,
}

impl Entry {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            category: category.into(),
            amount,
        }
    }

    /// The entry's date in `YYYY-MM-DD` form, as written to the date column.
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
