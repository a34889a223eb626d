use thiserror::Error;

use crate::{account::AccountNumber, client::TaxId};

/// Reasons an operation on the bank was turned down.
///
/// None of these are faults: they are the expected outcomes of bad user input,
/// and a rejected operation leaves every balance, counter and history untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("balance would exceed the largest representable amount")]
    BalanceOverflow,

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("amount exceeds the per-withdrawal limit")]
    OverdraftLimitExceeded,

    #[error("withdrawal limit for this session reached")]
    WithdrawalLimitReached,

    #[error("no client with tax id {0}")]
    UnknownClient(TaxId),

    #[error("no account with number {0}")]
    UnknownAccount(AccountNumber),

    #[error("a client with tax id {0} already exists")]
    DuplicateClient(TaxId),
}

pub type Result<T> = std::result::Result<T, BankError>;
