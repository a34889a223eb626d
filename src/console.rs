//! Text menu driving the bank for one session.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    account::AccountNumber,
    client::{Person, TaxId},
    config::Settings,
    engine::Bank,
    error::BankError,
    statement::{self, Statement},
    transaction::{Transaction, TransactionKind},
};

const MENU: &str = "
================ MENU ================
[d]\tDeposit
[s]\tWithdraw
[e]\tStatement
[x]\tExport statement (CSV)
[nc]\tNew account
[lc]\tList accounts
[nu]\tNew client
[q]\tQuit
=> ";

const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

pub struct Console<R, W> {
    input: R,
    output: W,
    bank: Bank,
    settings: Settings,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            bank: Bank::new(),
            settings,
        }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    /// Serves menu commands until `q` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let Some(choice) = self.prompt(MENU)? else {
                break;
            };
            debug!(command = %choice, "menu");

            match choice.as_str() {
                "d" => self.transact(TransactionKind::Deposit)?,
                "s" => self.transact(TransactionKind::Withdrawal)?,
                "e" => self.show_statement()?,
                "x" => self.export_statement()?,
                "nu" => self.new_client()?,
                "nc" => self.new_account()?,
                "lc" => self.list_accounts()?,
                "q" => break,
                _ => writeln!(
                    self.output,
                    "Invalid operation, please select the desired operation again."
                )?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn transact(&mut self, kind: TransactionKind) -> anyhow::Result<()> {
        let Some(number) = self.read_account()? else {
            return Ok(());
        };
        let label = match kind {
            TransactionKind::Deposit => "Deposit amount: ",
            TransactionKind::Withdrawal => "Withdrawal amount: ",
        };
        let Some(amount) = self.read_parsed::<Decimal>(label, "Invalid amount.")? else {
            return Ok(());
        };

        match Transaction::new(kind, amount).and_then(|t| self.bank.apply(number, t)) {
            Ok(()) => {
                let done = match kind {
                    TransactionKind::Deposit => "Deposit completed successfully!",
                    TransactionKind::Withdrawal => "Withdrawal completed successfully!",
                };
                self.success(done)
            }
            Err(e) => self.failure(&e),
        }
    }

    fn show_statement(&mut self) -> anyhow::Result<()> {
        let Some(number) = self.read_account()? else {
            return Ok(());
        };
        if let Some(account) = self.bank.account(number) {
            writeln!(self.output, "\n{}", Statement::new(account))?;
        }
        Ok(())
    }

    fn export_statement(&mut self) -> anyhow::Result<()> {
        let Some(number) = self.read_account()? else {
            return Ok(());
        };
        if let Some(account) = self.bank.account(number) {
            statement::write_csv(account.history(), &mut self.output)?;
        }
        Ok(())
    }

    fn new_client(&mut self) -> anyhow::Result<()> {
        let Some(tax_id) = self.prompt("Tax id (numbers only): ")? else {
            return Ok(());
        };
        if tax_id.is_empty() {
            return self.notice("Tax id cannot be empty.");
        }
        let tax_id = TaxId::new(tax_id);
        if self.bank.client(&tax_id).is_some() {
            return self.failure(&BankError::DuplicateClient(tax_id));
        }

        let Some(full_name) = self.prompt("Full name: ")? else {
            return Ok(());
        };
        let Some(birth_date) = self.prompt("Birth date (dd-mm-yyyy): ")? else {
            return Ok(());
        };
        let Ok(birth_date) = NaiveDate::parse_from_str(&birth_date, BIRTH_DATE_FORMAT) else {
            return self.notice("Invalid date, expected dd-mm-yyyy.");
        };
        let Some(address) =
            self.prompt("Address (street, number - district - city/state): ")?
        else {
            return Ok(());
        };

        let person = Person {
            tax_id,
            full_name,
            birth_date,
        };
        match self.bank.register_client(person, address) {
            Ok(_) => self.success("Client registered successfully!"),
            Err(e) => self.failure(&e),
        }
    }

    fn new_account(&mut self) -> anyhow::Result<()> {
        let Some(tax_id) = self.prompt("Client tax id: ")? else {
            return Ok(());
        };
        match self
            .bank
            .open_account(&TaxId::new(tax_id), self.settings.account_kind)
        {
            Ok(number) => self.success(&format!("Account {number} opened successfully!")),
            Err(e) => self.failure(&e),
        }
    }

    fn list_accounts(&mut self) -> anyhow::Result<()> {
        let summaries = self.bank.summaries();
        if summaries.is_empty() {
            writeln!(self.output, "No accounts opened.")?;
        }
        for summary in summaries {
            writeln!(self.output, "{}", "=".repeat(100))?;
            writeln!(self.output, "Branch:\t\t{}", summary.branch)?;
            writeln!(self.output, "Account:\t{}", summary.number)?;
            writeln!(self.output, "Holder:\t\t{}", summary.holder)?;
            writeln!(self.output, "Balance:\tR$ {:.2}", summary.balance)?;
        }
        Ok(())
    }

    /// Reads an account number and checks it exists.
    fn read_account(&mut self) -> anyhow::Result<Option<AccountNumber>> {
        let Some(number) = self.read_parsed::<u32>("Account number: ", "Invalid account number.")?
        else {
            return Ok(None);
        };
        let number = AccountNumber::new(number);
        if self.bank.account(number).is_none() {
            self.failure(&BankError::UnknownAccount(number))?;
            return Ok(None);
        }
        Ok(Some(number))
    }

    fn read_parsed<T: FromStr>(&mut self, label: &str, invalid: &str) -> anyhow::Result<Option<T>> {
        let Some(text) = self.prompt(label)? else {
            return Ok(None);
        };
        match text.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                self.notice(invalid)?;
                Ok(None)
            }
        }
    }

    /// Prints `label` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn success(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.output, "\n=== {message} ===")?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.output, "\n@@@ {message} @@@")?;
        Ok(())
    }

    fn failure(&mut self, error: &BankError) -> anyhow::Result<()> {
        let message = match error {
            BankError::InvalidAmount => "Operation failed! The amount is invalid.",
            BankError::BalanceOverflow => {
                "Operation failed! The balance cannot hold that amount."
            }
            BankError::InsufficientFunds => "Operation failed! Insufficient funds.",
            BankError::OverdraftLimitExceeded => {
                "Operation failed! The amount exceeds the withdrawal limit."
            }
            BankError::WithdrawalLimitReached => {
                "Operation failed! Maximum number of withdrawals reached."
            }
            BankError::UnknownClient(_) => "Client not found, account opening aborted!",
            BankError::UnknownAccount(_) => "Account not found!",
            BankError::DuplicateClient(_) => "A client with this tax id already exists!",
        };
        self.notice(message)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rust_decimal_macros::dec;

    use super::*;

    fn run(script: &str, settings: Settings) -> (String, Bank) {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new(script.to_string()), &mut output, settings);
        console.run().unwrap();
        let bank = console.bank().clone();
        drop(console);
        (String::from_utf8(output).unwrap(), bank)
    }

    const CLIENT: &str = "nu\n123\nJoana Lima\n01-02-1990\nRua B, 5 - Centro - Natal/RN\n";

    #[test]
    fn full_session() {
        let script = format!(
            "{CLIENT}nc\n123\nd\n1\n1000\ns\n1\n300\ns\n1\n300\ns\n1\n300\ns\n1\n300\ne\n1\nq\n"
        );
        let (out, bank) = run(&script, Settings::default());

        let account = bank.account(AccountNumber::FIRST).unwrap();
        assert_eq!(account.balance(), dec!(100));
        assert_eq!(account.withdrawals_made(), 3);
        assert_eq!(account.history().len(), 4);
        assert!(out.contains("Maximum number of withdrawals reached."));
        assert!(out.contains("Balance:\tR$ 100.00"));
    }

    #[test]
    fn bad_input_leaves_bank_untouched() {
        let script = format!("{CLIENT}nc\n123\nd\n1\nabc\nd\n1\n-50\nd\n2\ns\n1\n0\nq\n");
        let (out, bank) = run(&script, Settings::default());

        let account = bank.account(AccountNumber::FIRST).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
        assert!(account.history().is_empty());
        assert!(out.contains("Invalid amount."));
        assert!(out.contains("The amount is invalid."));
        assert!(out.contains("Account not found!"));
    }

    #[test]
    fn duplicate_client_is_refused_early() {
        let script = format!("{CLIENT}nu\n123\nq\n");
        let (out, bank) = run(&script, Settings::default());

        assert!(out.contains("A client with this tax id already exists!"));
        assert_eq!(bank.clients().count(), 1);
    }

    #[test]
    fn invalid_birth_date_registers_nobody() {
        let (out, bank) = run("nu\n9\nJo\n1990-02-01\n", Settings::default());
        assert!(out.contains("Invalid date, expected dd-mm-yyyy."));
        assert_eq!(bank.clients().count(), 0);
    }

    #[test]
    fn basic_accounts_skip_withdrawal_limits() {
        let script = format!("{CLIENT}nc\n123\nd\n1\n2000\ns\n1\n900\ns\n1\n900\n");
        let (_, bank) = run(&script, Settings::basic());
        assert_eq!(bank.account(AccountNumber::FIRST).unwrap().balance(), dec!(200));
    }

    #[test]
    fn overflowing_deposit_keeps_session_alive() {
        let script = format!(
            "{CLIENT}nc\n123\nd\n1\n79228162514264337593543950335\nd\n1\n79228162514264337593543950335\nd\n1\n5\nq\n"
        );
        let (out, bank) = run(&script, Settings::default());

        let account = bank.account(AccountNumber::FIRST).unwrap();
        assert_eq!(account.balance(), Decimal::MAX);
        assert_eq!(account.history().len(), 1);
        assert_eq!(
            out.matches("The balance cannot hold that amount.").count(),
            2
        );
    }

    #[test]
    fn unknown_command_and_end_of_input() {
        let (out, _) = run("zz\n", Settings::default());
        assert!(out.contains("Invalid operation"));
    }
}
