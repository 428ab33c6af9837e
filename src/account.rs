//! Account model and debit application.
//!
//! The balance is mutated only through [`Account::apply_transaction`].

use crate::money::Money;
use crate::transaction::Transaction;

/// How an account responds to a debit that exceeds its balance.
///
/// The set of policies is closed by construction: there is no trait to
/// implement, so no further variants can be added from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebitPolicy {
    /// Subtract unconditionally. The balance may go negative; no
    /// rejection path exists.
    Unchecked,

    /// Reject any debit larger than the current balance, leaving the
    /// balance unchanged. The balance can never go negative through
    /// transaction application.
    RejectOverdraft,
}

/// Result of applying a transaction to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebitOutcome {
    /// The balance was reduced by the transaction amount.
    Applied,

    /// The debit exceeded the balance under [`DebitPolicy::RejectOverdraft`];
    /// the balance is unchanged.
    InsufficientFunds,
}

impl DebitOutcome {
    /// Returns `true` if the transaction was applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, DebitOutcome::Applied)
    }
}

/// A balance-holding account.
///
/// The account number is assigned at creation and immutable thereafter.
#[derive(Debug, Clone)]
pub struct Account {
    number: String,
    balance: Money,
    policy: DebitPolicy,
}

impl Account {
    /// Creates an account with the given number, opening balance, and
    /// debit policy.
    pub fn new(number: impl Into<String>, opening_balance: Money, policy: DebitPolicy) -> Self {
        Account {
            number: number.into(),
            balance: opening_balance,
            policy,
        }
    }

    /// Account number.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Current balance.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Debit policy in effect.
    pub fn policy(&self) -> DebitPolicy {
        self.policy
    }

    /// Applies a debit transaction to the balance.
    ///
    /// Under [`DebitPolicy::Unchecked`] the amount is always subtracted,
    /// even when that produces a negative balance. Under
    /// [`DebitPolicy::RejectOverdraft`] a debit larger than the balance
    /// is rejected with no partial effect.
    pub fn apply_transaction(&mut self, tx: &Transaction) -> DebitOutcome {
        if self.policy == DebitPolicy::RejectOverdraft && tx.amount() > self.balance {
            return DebitOutcome::InsufficientFunds;
        }

        self.balance -= tx.amount();
        DebitOutcome::Applied
    }
}
