use std::io;

use clap::Parser;
use ledger_sim::{config::Settings, console::Console};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ledger-sim", version, about = "Console simulator of a small bank ledger")]
struct Args {
    /// Largest amount a single withdrawal may take from a checking account
    #[arg(long, default_value = "500")]
    overdraft_limit: Decimal,

    /// Withdrawals allowed per checking account in one session
    #[arg(long, default_value_t = 3)]
    max_withdrawals: u32,

    /// Open basic accounts, with no withdrawal limits besides the balance
    #[arg(long)]
    basic: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let settings = if args.basic {
        Settings::basic()
    } else {
        Settings::checking(args.overdraft_limit, args.max_withdrawals)
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock(), settings).run()
}
