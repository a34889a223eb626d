use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    account::{Account, AccountNumber},
    error::{BankError, Result},
    transaction::Transaction,
};

/// Personal tax id (CPF). Identifies a person; never changes once registered.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaxId(String);

impl TaxId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub tax_id: TaxId,
    pub full_name: String,
    pub birth_date: NaiveDate,
}

/// A registered person together with the accounts they own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Client {
    person: Person,
    address: String,
    accounts: Vec<Account>,
}

impl Client {
    /// Builds a client with no accounts. Duplicate tax ids are a registry concern.
    pub fn register(person: Person, address: impl Into<String>) -> Self {
        Self {
            person,
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.person.tax_id
    }

    pub fn full_name(&self) -> &str {
        &self.person.full_name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.person.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Owned accounts in the order they were opened.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number() == number)
    }

    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// The only way money moves: applies `transaction` to one of this client's
    /// accounts, which records it in its history if and only if it is accepted.
    pub fn apply_transaction(
        &mut self,
        number: AccountNumber,
        transaction: Transaction,
    ) -> Result<()> {
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.number() == number)
            .ok_or(BankError::UnknownAccount(number))?;

        match account.apply(transaction) {
            Ok(()) => {
                debug!(
                    account = %number,
                    kind = %transaction.kind(),
                    amount = %transaction.amount(),
                    balance = %account.balance(),
                    "transaction accepted"
                );
                Ok(())
            }
            Err(e) => {
                info!(
                    account = %number,
                    kind = %transaction.kind(),
                    amount = %transaction.amount(),
                    "transaction rejected: {e}"
                );
                Err(e)
            }
        }
    }
}
