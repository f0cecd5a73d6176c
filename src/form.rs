use chrono::Local;
use thiserror::Error;

use crate::models::{round_cents, Category, Transaction, TxKind};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Description is required")]
    EmptyDescription,

    #[error("Amount must be a positive number")]
    InvalidAmount,
}

fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Pending-transaction scratch state. Fields hold whatever the user has
/// typed so far (a half-typed amount is fine); nothing is checked until
/// `submit`. A draft becomes a `Transaction` only on successful submit.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub description: String,
    pub category: Category,
    pub amount: String,
    pub kind: TxKind,
    pub date: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            description: String::new(),
            category: Category::ALL[0],
            amount: String::new(),
            kind: TxKind::Expense,
            date: today(),
        }
    }
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft and build a committed transaction around the given
    /// id. On success, description/amount/date reset to defaults while
    /// category and kind are kept — batch entry tends to repeat those two.
    /// On failure the draft is untouched.
    pub fn submit(&mut self, id: String) -> Result<Transaction, ValidationError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidAmount)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidAmount);
        }

        let date = if self.date.trim().is_empty() {
            today()
        } else {
            self.date.trim().to_string()
        };

        let tx = Transaction {
            id,
            description: description.to_string(),
            category: self.category,
            amount: round_cents(amount),
            kind: self.kind,
            date,
        };

        self.description.clear();
        self.amount.clear();
        self.date = today();
        Ok(tx)
    }

    /// Reset every field, including category and kind.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
