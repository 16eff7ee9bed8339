//! In-memory transaction ledger and CSV loading
//!
//! Expected CSV layout (header required, extra columns ignored):
//!
//! ```text
//! date,amount,category,type,description
//! 2024-03-01,500,Food,expense,Swiggy order
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{Transaction, TransactionType};

/// Raw CSV row before validation
#[derive(Debug, Deserialize)]
struct LedgerRow {
    date: String,
    amount: String,
    category: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    description: Option<String>,
}

/// Ordered collection of transactions (insertion order preserved)
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Parse a ledger CSV. Rows that fail validation are skipped.
    pub fn load_csv<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut transactions = Vec::new();
        let mut skipped = 0usize;

        for (line, result) in rdr.deserialize::<LedgerRow>().enumerate() {
            let row = result?;
            match parse_row(&row) {
                Ok(tx) => transactions.push(tx),
                Err(e) => {
                    skipped += 1;
                    // +2: header line and 1-based numbering
                    warn!(line = line + 2, error = %e, "Skipping ledger row");
                }
            }
        }

        debug!(
            loaded = transactions.len(),
            skipped, "Ledger CSV parsed"
        );
        Ok(Self { transactions })
    }

    pub fn load_csv_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::load_csv(file)
    }

    pub fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Transactions dated in the same calendar month as `today`
    pub fn in_month(&self, today: NaiveDate) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|t| same_month(t.date, today))
            .cloned()
            .collect()
    }

    /// Newest `limit` transactions, most recent first
    pub fn recent(&self, limit: usize) -> Vec<Transaction> {
        let mut sorted: Vec<Transaction> = self.transactions.clone();
        // Stable sort keeps later-inserted rows after earlier ones on the same date
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.truncate(limit);
        sorted
    }
}

pub(crate) fn same_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

fn parse_row(row: &LedgerRow) -> Result<Transaction> {
    let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
        .map_err(|_| Error::InvalidData(format!("Invalid date: {}", row.date)))?;

    let amount: f64 = row
        .amount
        .replace(',', "")
        .parse()
        .map_err(|_| Error::InvalidData(format!("Invalid amount: {}", row.amount)))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidData(format!(
            "Amount must be positive: {}",
            row.amount
        )));
    }

    let kind: TransactionType = row.kind.parse().map_err(Error::InvalidData)?;

    let category = if row.category.is_empty() {
        "Others".to_string()
    } else {
        row.category.clone()
    };

    Ok(Transaction {
        date,
        amount,
        category,
        kind,
        description: row.description.clone().unwrap_or_default(),
    })
}
