use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    client::TaxId,
    error::{BankError, Result},
    transaction::{History, Transaction, TransactionKind, amount_is_valid},
};

/// Every account belongs to the same branch.
pub const BRANCH_CODE: &str = "0001";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AccountNumber(u32);

impl AccountNumber {
    pub const FIRST: AccountNumber = AccountNumber(1);

    pub fn new(number: u32) -> Self {
        Self(number)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Limits a checking account puts on withdrawals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawalPolicy {
    /// Largest amount a single withdrawal may take, regardless of balance.
    pub overdraft_limit: Decimal,
    /// Withdrawals allowed for the lifetime of the session.
    pub max_withdrawals: u32,
}

impl Default for WithdrawalPolicy {
    fn default() -> Self {
        Self {
            overdraft_limit: Decimal::from(500),
            max_withdrawals: 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountKind {
    /// Withdrawals are only bounded by the balance.
    Basic,
    Checking(WithdrawalPolicy),
}

impl Default for AccountKind {
    fn default() -> Self {
        AccountKind::Checking(WithdrawalPolicy::default())
    }
}

impl AccountKind {
    /// Checks the limits of this kind of account before any funds move.
    fn authorize_withdrawal(&self, amount: Decimal, withdrawals_made: u32) -> Result<()> {
        match self {
            AccountKind::Basic => Ok(()),
            AccountKind::Checking(policy) => {
                if withdrawals_made >= policy.max_withdrawals {
                    return Err(BankError::WithdrawalLimitReached);
                }
                if amount > policy.overdraft_limit {
                    return Err(BankError::OverdraftLimitExceeded);
                }
                Ok(())
            }
        }
    }
}

/// Client's account at the branch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    number: AccountNumber,
    branch: &'static str,
    owner: TaxId,
    balance: Decimal,
    kind: AccountKind,
    withdrawals_made: u32,
    history: History,
}

impl Account {
    /// Opens an empty account. The owner must already be a known client.
    pub fn open(owner: TaxId, number: AccountNumber, kind: AccountKind) -> Self {
        Self {
            number,
            branch: BRANCH_CODE,
            owner,
            balance: Decimal::ZERO,
            kind,
            withdrawals_made: 0,
            history: History::new(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &str {
        self.branch
    }

    pub fn owner(&self) -> &TaxId {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn withdrawals_made(&self) -> u32 {
        self.withdrawals_made
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Updates the account accordingly to the transaction and records it.
    /// On error nothing changes and the transaction is dropped.
    pub(crate) fn apply(&mut self, transaction: Transaction) -> Result<()> {
        match transaction.kind() {
            TransactionKind::Deposit => self.deposit(transaction.amount())?,
            TransactionKind::Withdrawal => self.withdraw(transaction.amount())?,
        }
        self.history.append(transaction);
        Ok(())
    }

    fn deposit(&mut self, amount: Decimal) -> Result<()> {
        if !amount_is_valid(amount) {
            return Err(BankError::InvalidAmount);
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(BankError::BalanceOverflow)?;
        Ok(())
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        if !amount_is_valid(amount) {
            return Err(BankError::InvalidAmount);
        }
        self.kind.authorize_withdrawal(amount, self.withdrawals_made)?;
        if amount > self.balance {
            return Err(BankError::InsufficientFunds);
        }

        self.balance -= amount;
        if let AccountKind::Checking(_) = self.kind {
            self.withdrawals_made += 1;
        }
        Ok(())
    }
}
