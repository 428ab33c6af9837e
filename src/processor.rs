//! Transaction processors.
//!
//! The three processor kinds are behaviorally identical label dispatch:
//! each emits one line naming itself, the amount, and the category. They
//! never mutate the transaction or the account.

use crate::error::Result;
use crate::transaction::Transaction;
use log::debug;
use std::io::Write;

/// The available processor kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorKind {
    /// Plain bank-to-bank transfer.
    BankTransfer,

    /// Mobile wallet payment.
    MobileWallet,

    /// Cryptocurrency payment.
    Crypto,
}

impl ProcessorKind {
    /// Fixed human-readable label for this processor.
    pub fn label(&self) -> &'static str {
        match self {
            ProcessorKind::BankTransfer => "Bank Transfer",
            ProcessorKind::MobileWallet => "Mobile Wallet",
            ProcessorKind::Crypto => "Crypto",
        }
    }

    /// Emits the processing line for a transaction.
    ///
    /// The output depends on the transaction only through formatting;
    /// the label is fixed per variant.
    pub fn process<W: Write>(&self, tx: &Transaction, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "[{}] Processing payment of {} ({})",
            self.label(),
            tx.amount(),
            tx.category()
        )?;
        debug!("{} handled transaction {}", self.label(), tx.id());
        Ok(())
    }
}
