//! Coordinating session: wires processors, the account, and the ledger.
//!
//! All observable text goes through an injected output sink so behavior
//! is testable without capturing the process's stdout.

use crate::account::{Account, DebitOutcome, DebitPolicy};
use crate::error::Result;
use crate::ledger::Ledger;
use crate::money::Money;
use crate::processor::ProcessorKind;
use crate::transaction::Transaction;
use chrono::Utc;
use log::{debug, warn};
use std::io::Write;
use std::str::FromStr;

/// Whether rejected transactions are still recorded in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordPolicy {
    /// Record every transaction, accepted or not. This matches the
    /// historical behavior of the demo.
    All,

    /// Record only transactions the account accepted.
    AcceptedOnly,
}

/// A single-run session over one account and one ledger.
///
/// Transactions flow through [`Session::handle`]: processor first, then
/// account application, then ledger recording. The session owns the
/// output sink for its lifetime.
pub struct Session<W: Write> {
    account: Account,
    ledger: Ledger,
    record_policy: RecordPolicy,
    out: W,
}

impl<W: Write> Session<W> {
    /// Creates a session over the given account and sink.
    pub fn new(account: Account, record_policy: RecordPolicy, out: W) -> Self {
        Session {
            account,
            ledger: Ledger::new(),
            record_policy,
            out,
        }
    }

    /// Runs one transaction through a processor and the account.
    ///
    /// Emits the processor line and an account status line. A rejected
    /// debit is a reported outcome, not an error; `Err` is returned only
    /// for sink I/O failures.
    pub fn handle(&mut self, kind: ProcessorKind, tx: Transaction) -> Result<DebitOutcome> {
        kind.process(&tx, &mut self.out)?;

        let outcome = self.account.apply_transaction(&tx);
        match outcome {
            DebitOutcome::Applied => {
                writeln!(
                    self.out,
                    "Account {}: debited {}, new balance {}",
                    self.account.number(),
                    tx.amount(),
                    self.account.balance()
                )?;
                debug!(
                    "transaction {} applied, balance {}",
                    tx.id(),
                    self.account.balance()
                );
            }
            DebitOutcome::InsufficientFunds => {
                writeln!(
                    self.out,
                    "Account {}: insufficient funds for {}, balance remains {}",
                    self.account.number(),
                    tx.amount(),
                    self.account.balance()
                )?;
                warn!(
                    "transaction {} rejected: {} exceeds balance {}",
                    tx.id(),
                    tx.amount(),
                    self.account.balance()
                );
            }
        }

        if outcome.is_applied() || self.record_policy == RecordPolicy::All {
            self.ledger.record(tx);
        } else {
            debug!("transaction {} not recorded (rejected)", tx.id());
        }

        Ok(outcome)
    }

    /// Prints every ledger entry in insertion order and the final balance.
    pub fn write_summary(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Transaction summary")?;
        writeln!(self.out, "-------------------")?;

        for tx in self.ledger.iter() {
            writeln!(
                self.out,
                "#{}  {}  {}  {}",
                tx.id(),
                tx.timestamp().format("%Y-%m-%d %H:%M:%S UTC"),
                tx.amount(),
                tx.category()
            )?;
        }

        writeln!(self.out, "{} transactions recorded", self.ledger.len())?;
        writeln!(
            self.out,
            "Final balance for account {}: {}",
            self.account.number(),
            self.account.balance()
        )?;
        Ok(())
    }

    /// The account under this session.
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// The ledger accumulated so far.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

/// Runs the fixed demo scenario against the given sink.
///
/// One overdraft-rejecting account opens with 1000.00; three debits of
/// 200.00, 150.00, and 50.00 are dispatched through the three processor
/// kinds, and a summary is printed. The final balance is 600.00.
pub fn run_demo<W: Write>(out: W) -> Result<()> {
    let account = Account::new(
        "ACC-1001",
        Money::from_str("1000.00")?,
        DebitPolicy::RejectOverdraft,
    );
    let mut session = Session::new(account, RecordPolicy::All, out);

    session.handle(
        ProcessorKind::BankTransfer,
        Transaction::new(1, Utc::now(), Money::from_str("200.00")?, "Utilities"),
    )?;
    session.handle(
        ProcessorKind::MobileWallet,
        Transaction::new(2, Utc::now(), Money::from_str("150.00")?, "Groceries"),
    )?;
    session.handle(
        ProcessorKind::Crypto,
        Transaction::new(3, Utc::now(), Money::from_str("50.00")?, "Entertainment"),
    )?;

    session.write_summary()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn debit(id: u32, amount: &str) -> Transaction {
        Transaction::new(id, Utc::now(), money(amount), "Test")
    }

    #[test]
    fn test_three_debits_reach_final_balance() {
        let mut out = Vec::new();
        let account = Account::new("ACC-1001", money("1000.00"), DebitPolicy::RejectOverdraft);
        let mut session = Session::new(account, RecordPolicy::All, &mut out);

        assert!(session
            .handle(ProcessorKind::BankTransfer, debit(1, "200.00"))
            .unwrap()
            .is_applied());
        assert_eq!(session.account().balance().to_string(), "800.00");

        assert!(session
            .handle(ProcessorKind::MobileWallet, debit(2, "150.00"))
            .unwrap()
            .is_applied());
        assert_eq!(session.account().balance().to_string(), "650.00");

        assert!(session
            .handle(ProcessorKind::Crypto, debit(3, "50.00"))
            .unwrap()
            .is_applied());
        assert_eq!(session.account().balance().to_string(), "600.00");

        let ids: Vec<u32> = session.ledger().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_rejected_debit_is_reported_and_recorded() {
        let mut out = Vec::new();
        let account = Account::new("ACC-9", money("100.00"), DebitPolicy::RejectOverdraft);
        let mut session = Session::new(account, RecordPolicy::All, &mut out);

        let outcome = session
            .handle(ProcessorKind::BankTransfer, debit(1, "200.00"))
            .unwrap();

        assert_eq!(outcome, DebitOutcome::InsufficientFunds);
        assert_eq!(session.account().balance().to_string(), "100.00");
        assert_eq!(session.ledger().len(), 1);

        let text = String::from_utf8(out.clone()).unwrap();
        assert!(text.contains("insufficient funds for 200.00"));
        assert!(text.contains("balance remains 100.00"));
    }

    #[test]
    fn test_accepted_only_policy_skips_rejected_transactions() {
        let mut out = Vec::new();
        let account = Account::new("ACC-9", money("100.00"), DebitPolicy::RejectOverdraft);
        let mut session = Session::new(account, RecordPolicy::AcceptedOnly, &mut out);

        session
            .handle(ProcessorKind::BankTransfer, debit(1, "200.00"))
            .unwrap();
        session
            .handle(ProcessorKind::MobileWallet, debit(2, "40.00"))
            .unwrap();

        let ids: Vec<u32> = session.ledger().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_summary_lists_entries_and_final_balance() {
        let mut out = Vec::new();
        let account = Account::new("ACC-1", money("10.00"), DebitPolicy::RejectOverdraft);
        let mut session = Session::new(account, RecordPolicy::All, &mut out);

        session
            .handle(ProcessorKind::Crypto, debit(1, "4.00"))
            .unwrap();
        session.write_summary().unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Transaction summary"));
        assert!(text.contains("#1"));
        assert!(text.contains("1 transactions recorded"));
        assert!(text.contains("Final balance for account ACC-1: 6.00"));
    }

    #[test]
    fn test_run_demo_ends_at_600() {
        let mut out = Vec::new();
        run_demo(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[Bank Transfer] Processing payment of 200.00 (Utilities)"));
        assert!(text.contains("[Mobile Wallet] Processing payment of 150.00 (Groceries)"));
        assert!(text.contains("[Crypto] Processing payment of 50.00 (Entertainment)"));
        assert!(text.contains("3 transactions recorded"));
        assert!(text.contains("Final balance for account ACC-1001: 600.00"));
    }
}
