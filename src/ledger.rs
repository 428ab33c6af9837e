//! Append-only in-memory transaction ledger.

use crate::transaction::Transaction;

/// An ordered record of transactions for a single run.
///
/// Entries are kept in insertion order; there is no deduplication and no
/// reordering. The only mutation is [`Ledger::record`].
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<Transaction>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Appends a transaction to the ledger.
    pub fn record(&mut self, tx: Transaction) {
        self.entries.push(tx);
    }

    /// Iterates over recorded transactions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }

    /// Number of recorded transactions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use chrono::Utc;
    use std::str::FromStr;

    fn tx(id: u32) -> Transaction {
        Transaction::new(id, Utc::now(), Money::from_str("1.00").unwrap(), "Test")
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.record(tx(3));
        ledger.record(tx(1));
        ledger.record(tx(2));

        let ids: Vec<u32> = ledger.iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_duplicate_ids_are_not_deduplicated() {
        let mut ledger = Ledger::new();
        ledger.record(tx(1));
        ledger.record(tx(1));

        assert_eq!(ledger.len(), 2);
    }
}
