//! Read-only renderings of an account's history.

use std::{fmt, io};

use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    account::Account,
    transaction::{History, TransactionKind},
};

/// The account statement: every recorded movement followed by the balance.
pub struct Statement<'a> {
    account: &'a Account,
}

impl<'a> Statement<'a> {
    pub fn new(account: &'a Account) -> Self {
        Self { account }
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "================ STATEMENT ================")?;
        let history = self.account.history();
        if history.is_empty() {
            writeln!(f, "No transactions recorded.")?;
        }
        for transaction in history.entries() {
            let label = match transaction.kind() {
                TransactionKind::Deposit => "Deposit:",
                TransactionKind::Withdrawal => "Withdrawal:",
            };
            writeln!(f, "{label}\tR$ {:.2}", transaction.amount())?;
        }
        writeln!(f)?;
        writeln!(f, "Balance:\tR$ {:.2}", self.account.balance())?;
        write!(f, "===========================================")
    }
}

#[derive(Serialize)]
struct Row {
    kind: TransactionKind,
    amount: Decimal,
}

/// Writes the history as `kind,amount` CSV records, oldest first. The header
/// line is written even when there is nothing to list.
pub fn write_csv<W: io::Write>(history: &History, writer: W) -> csv::Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(["kind", "amount"])?;
    for transaction in history.entries() {
        writer.serialize(Row {
            kind: transaction.kind(),
            amount: transaction.amount(),
        })?;
    }
    writer.flush()?;
    Ok(())
}
