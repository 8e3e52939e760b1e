//! Balance change records.

use serde::{Deserialize, Serialize};
use wallet_common::{Currency, UserId};

use crate::entry::{EntryType, LedgerEntry};

/// Outcome of one applied deposit or withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceChange {
    /// Wallet owner.
    pub user_id: UserId,
    /// Wallet currency.
    pub currency: Currency,
    /// Balance before the change.
    pub balance_before: i64,
    /// Balance after the change.
    pub balance_after: i64,
    /// Ledger entry recorded for the change.
    pub entry: LedgerEntry,
}

impl BalanceChange {
    /// Credit or debit.
    pub fn change_type(&self) -> EntryType {
        self.entry.entry_type()
    }
}
