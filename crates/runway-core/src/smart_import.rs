//! Turning free text into transactions
//!
//! [`interpret_message`] reads a bank/UPI style message ("Rs.450 paid to
//! Swiggy") and [`auto_categorize`] maps a quick-add description to a
//! category. Keywords match at the start of a word, case-insensitively, so
//! plurals and compounds ("bills", "ubereats") still count.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Transaction, TransactionType};

/// Characters of the message kept in the generated description
const DESCRIPTION_PREVIEW_CHARS: usize = 20;

/// Category used when no quick-add keyword matches
pub const DEFAULT_CATEGORY: &str = "Others";

/// Category used when no message keyword matches
pub const MESSAGE_FALLBACK_CATEGORY: &str = "Other";

const QUICK_ADD_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Food",
        &["swiggy", "zomato", "dominos", "mcdonalds", "cafe", "coffee"],
    ),
    ("Travel", &["uber", "ola", "rapido", "metro", "bus", "train"]),
    (
        "Shopping",
        &["amazon", "flipkart", "myntra", "zara", "h&m"],
    ),
    ("Recharge", &["jio", "airtel", "vi", "wifi", "internet"]),
    ("Fees", &["fees", "college", "tuition", "library", "exam"]),
    (
        "Entertainment",
        &["movie", "netflix", "spotify", "steam"],
    ),
];

/// Message keywords; `Income` also flips the transaction type
const MESSAGE_KEYWORDS: &[(&str, &[&str])] = &[
    ("Food", &["swiggy", "zomato", "food", "lunch", "tea"]),
    ("Travel", &["bus", "uber", "ola", "travel"]),
    ("Bills", &["recharge", "jio", "airtel", "bill"]),
    ("Income", &["scholarship", "salary", "received", "credited"]),
];

fn keyword_regex(words: &[&str]) -> Regex {
    let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    // Keywords are escaped literals, so the pattern is always valid
    Regex::new(&format!(r"\b(?:{})", alternatives.join("|"))).expect("valid regex")
}

fn compile_table(table: &[(&'static str, &[&str])]) -> Vec<(&'static str, Regex)> {
    table
        .iter()
        .map(|(category, words)| (*category, keyword_regex(words)))
        .collect()
}

fn quick_add_rules() -> &'static [(&'static str, Regex)] {
    static RULES: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    RULES.get_or_init(|| compile_table(QUICK_ADD_KEYWORDS))
}

fn message_rules() -> &'static [(&'static str, Regex)] {
    static RULES: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    RULES.get_or_init(|| compile_table(MESSAGE_KEYWORDS))
}

fn amount_regex() -> &'static Regex {
    static AMOUNT: OnceLock<Regex> = OnceLock::new();
    AMOUNT.get_or_init(|| {
        Regex::new(r"(?:\brs\.?|₹|\binr)\s*(\d[\d,]*(?:\.\d+)?)").expect("valid regex")
    })
}

fn first_match(rules: &[(&'static str, Regex)], text: &str) -> Option<&'static str> {
    rules
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(category, _)| *category)
}

/// Category for a quick-add description, [`DEFAULT_CATEGORY`] when nothing matches
pub fn auto_categorize(description: &str) -> &'static str {
    first_match(quick_add_rules(), &description.to_lowercase()).unwrap_or(DEFAULT_CATEGORY)
}

/// Build today's expense from a quick-add entry
pub fn quick_add(description: &str, amount: f64, date: NaiveDate) -> Result<Transaction> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidData("Invalid amount".to_string()));
    }
    let category = auto_categorize(description);
    tracing::debug!(category, amount, "Quick-add categorized");
    Ok(Transaction::expense(date, amount, category).with_description(description))
}

/// A message successfully read as a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretedMessage {
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub description: String,
}

impl InterpretedMessage {
    pub fn into_transaction(self, date: NaiveDate) -> Transaction {
        Transaction {
            date,
            amount: self.amount,
            category: self.category,
            kind: self.kind,
            description: self.description,
        }
    }
}

/// Read an amount and category out of free text
///
/// The amount must follow `rs`, `rs.`, `₹` or `inr`; thousands separators
/// are dropped. The first keyword group that matches wins.
pub fn interpret_message(message: &str) -> Result<InterpretedMessage> {
    let text = message.to_lowercase();

    let amount = amount_regex()
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok())
        .filter(|amount| *amount > 0.0)
        .ok_or_else(|| Error::InvalidData("Could not detect amount".to_string()))?;

    let category = first_match(message_rules(), &text).unwrap_or(MESSAGE_FALLBACK_CATEGORY);
    let kind = if category == "Income" {
        TransactionType::Income
    } else {
        TransactionType::Expense
    };

    let preview: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();

    Ok(InterpretedMessage {
        amount,
        category: category.to_string(),
        kind,
        description: format!("Smart Import: {}...", preview),
    })
}

/// Response body for a smart import attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ImportOutcome {
    pub fn imported(message: &InterpretedMessage) -> Self {
        Self {
            success: true,
            amount: Some(message.amount),
            category: Some(message.category.clone()),
            kind: Some(message.kind),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            amount: None,
            category: None,
            kind: None,
            error: Some(error.into()),
        }
    }
}
