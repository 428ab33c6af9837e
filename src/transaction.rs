//! Immutable transaction record.

use crate::money::Money;
use chrono::{DateTime, Utc};

/// A single monetary movement: identifier, timestamp, amount, category.
///
/// Transactions are immutable once constructed; there are no public
/// mutators. No validation is performed on the amount or category:
/// zero and negative amounts are tolerated, the account layer decides
/// whether a debit is acceptable.
#[derive(Debug, Clone)]
pub struct Transaction {
    id: u32,
    timestamp: DateTime<Utc>,
    amount: Money,
    category: String,
}

impl Transaction {
    /// Creates a new transaction record.
    pub fn new(
        id: u32,
        timestamp: DateTime<Utc>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Transaction {
            id,
            timestamp,
            amount,
            category: category.into(),
        }
    }

    /// Transaction identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Creation timestamp (UTC).
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Debit amount.
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Free-form category label.
    pub fn category(&self) -> &str {
        &self.category
    }
}
