use rust_decimal::Decimal;

use crate::account::{AccountKind, WithdrawalPolicy};

/// Session settings chosen at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Kind given to every account opened during the session.
    pub account_kind: AccountKind,
}

impl Settings {
    pub fn checking(overdraft_limit: Decimal, max_withdrawals: u32) -> Self {
        Self {
            account_kind: AccountKind::Checking(WithdrawalPolicy {
                overdraft_limit,
                max_withdrawals,
            }),
        }
    }

    pub fn basic() -> Self {
        Self {
            account_kind: AccountKind::Basic,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn defaults_to_checking_500_and_3() {
        assert_eq!(Settings::default(), Settings::checking(dec!(500), 3));
    }
}
