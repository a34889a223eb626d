//! In-memory retail-banking ledger: clients, checking accounts, deposits and
//! withdrawals with per-account history.

pub mod account;
pub mod client;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod statement;
pub mod transaction;

pub use account::{Account, AccountKind, AccountNumber, WithdrawalPolicy};
pub use client::{Client, Person, TaxId};
pub use engine::{AccountSummary, Bank};
pub use error::BankError;
pub use transaction::{History, Transaction, TransactionKind};
