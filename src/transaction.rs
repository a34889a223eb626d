use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{BankError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("Deposit"),
            TransactionKind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// A single movement of money. Once built it is never changed; accepted
/// transactions are moved into the account's [`History`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
}

impl Transaction {
    /// Fails with [`BankError::InvalidAmount`] unless `amount` is positive.
    pub fn new(kind: TransactionKind, amount: Decimal) -> Result<Self> {
        if !amount_is_valid(amount) {
            return Err(BankError::InvalidAmount);
        }
        Ok(Self { kind, amount })
    }

    pub fn deposit(amount: Decimal) -> Result<Self> {
        Self::new(TransactionKind::Deposit, amount)
    }

    pub fn withdrawal(amount: Decimal) -> Result<Self> {
        Self::new(TransactionKind::Withdrawal, amount)
    }

    /// Skips amount validation so tests can hand an account a bad transaction.
    #[cfg(test)]
    pub(crate) fn unchecked(kind: TransactionKind, amount: Decimal) -> Self {
        Self { kind, amount }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Checks if an amount can be moved at all.
pub(crate) fn amount_is_valid(amount: Decimal) -> bool {
    amount > Decimal::ZERO
}

/// Append-only log of the transactions accepted by one account, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    transactions: Vec<Transaction>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rejects_non_positive_amounts() {
        assert_eq!(Transaction::deposit(dec!(0)), Err(BankError::InvalidAmount));
        assert_eq!(
            Transaction::withdrawal(dec!(-50)),
            Err(BankError::InvalidAmount)
        );
    }

    #[test]
    fn keeps_kind_and_amount() {
        let transaction = Transaction::withdrawal(dec!(12.34)).unwrap();
        assert_eq!(transaction.kind(), TransactionKind::Withdrawal);
        assert_eq!(transaction.amount(), dec!(12.34));
    }

    #[test]
    fn history_preserves_insertion_order() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.append(Transaction::deposit(dec!(10)).unwrap());
        history.append(Transaction::withdrawal(dec!(3)).unwrap());
        history.append(Transaction::deposit(dec!(1)).unwrap());

        let kinds: Vec<_> = history.entries().iter().map(Transaction::kind).collect();
        assert_eq!(
            kinds,
            [
                TransactionKind::Deposit,
                TransactionKind::Withdrawal,
                TransactionKind::Deposit
            ]
        );
        assert_eq!(history.len(), 3);
    }
}
