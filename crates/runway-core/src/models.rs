//! Domain models for Runway

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Capitalized label used in chart legends
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "credit" => Ok(Self::Income),
            "expense" | "debit" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Always positive; direction comes from `kind`
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    pub fn expense(date: NaiveDate, amount: f64, category: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            kind: TransactionType::Expense,
            description: String::new(),
        }
    }

    pub fn income(date: NaiveDate, amount: f64, category: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            kind: TransactionType::Income,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }
}
