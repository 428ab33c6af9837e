//! # Bank Demo
//!
//! A fixed console demo: one account, three debit transactions, three
//! labeled processors, and an in-memory ledger summary.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: 2 decimal places via `rust_decimal`
//! - **Injected output sink**: all observable text goes through a
//!   `Write` implementor, so behavior is testable without capturing stdout
//! - **Closed variant sets**: debit policies and processor kinds are
//!   enums, not extensible traits
//! - **Explicit record policy**: whether rejected debits enter the ledger
//!   is a stated choice, not an accident
//!
//! ## Example
//!
//! ```
//! use bank_demo::run_demo;
//!
//! let mut out = Vec::new();
//! run_demo(&mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("600.00"));
//! ```

pub mod account;
pub mod error;
pub mod ledger;
pub mod money;
pub mod processor;
pub mod session;
pub mod transaction;

pub use account::{Account, DebitOutcome, DebitPolicy};
pub use error::{DemoError, Result};
pub use ledger::Ledger;
pub use money::Money;
pub use processor::ProcessorKind;
pub use session::{run_demo, RecordPolicy, Session};
pub use transaction::Transaction;
