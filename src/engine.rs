use indexmap::IndexMap;
use rust_decimal::Decimal;
use tracing::info;

use crate::{
    account::{Account, AccountKind, AccountNumber},
    client::{Client, Person, TaxId},
    error::{BankError, Result},
    transaction::Transaction,
};

/// One row of the account listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountSummary {
    pub branch: String,
    pub number: AccountNumber,
    pub holder: String,
    pub balance: Decimal,
}

/// Directory of clients and accounts for one session.
///
/// Clients own their accounts; the bank only remembers which client holds
/// each account number so transactions can be routed to them.
#[derive(Clone, Debug)]
pub struct Bank {
    clients: IndexMap<TaxId, Client>,
    accounts: IndexMap<AccountNumber, TaxId>,
    next_number: AccountNumber,
}

impl Default for Bank {
    fn default() -> Self {
        Self {
            clients: IndexMap::new(),
            accounts: IndexMap::new(),
            next_number: AccountNumber::FIRST,
        }
    }
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_client(
        &mut self,
        person: Person,
        address: impl Into<String>,
    ) -> Result<&Client> {
        if self.clients.contains_key(&person.tax_id) {
            return Err(BankError::DuplicateClient(person.tax_id));
        }

        let tax_id = person.tax_id.clone();
        info!(client = %tax_id, "client registered");
        let client = self
            .clients
            .entry(tax_id)
            .or_insert(Client::register(person, address));
        Ok(&*client)
    }

    /// Opens an account for an existing client under the next free number.
    pub fn open_account(&mut self, tax_id: &TaxId, kind: AccountKind) -> Result<AccountNumber> {
        let client = self
            .clients
            .get_mut(tax_id)
            .ok_or_else(|| BankError::UnknownClient(tax_id.clone()))?;

        let number = self.next_number;
        self.next_number = number.next();

        client.add_account(Account::open(tax_id.clone(), number, kind));
        self.accounts.insert(number, tax_id.clone());
        info!(client = %tax_id, account = %number, "account opened");
        Ok(number)
    }

    pub fn client(&self, tax_id: &TaxId) -> Option<&Client> {
        self.clients.get(tax_id)
    }

    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.values()
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        let owner = self.accounts.get(&number)?;
        self.clients.get(owner)?.account(number)
    }

    /// Routes `transaction` to the client that owns account `number`.
    pub fn apply(&mut self, number: AccountNumber, transaction: Transaction) -> Result<()> {
        let client = self
            .accounts
            .get(&number)
            .and_then(|owner| self.clients.get_mut(owner))
            .ok_or(BankError::UnknownAccount(number))?;
        client.apply_transaction(number, transaction)
    }

    pub fn summaries(&self) -> Vec<AccountSummary> {
        self.accounts
            .iter()
            .filter_map(|(&number, owner)| {
                let client = self.clients.get(owner)?;
                let account = client.account(number)?;
                Some(AccountSummary {
                    branch: account.branch().to_string(),
                    number,
                    holder: client.full_name().to_string(),
                    balance: account.balance(),
                })
            })
            .collect()
    }
}
