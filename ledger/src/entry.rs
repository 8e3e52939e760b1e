//! Ledger entry types.

use serde::{Deserialize, Serialize};

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    /// Credit entry (increases the balance).
    Credit,
    /// Debit entry (decreases the balance).
    Debit,
}

/// A single balance-changing event in a user's ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    /// Signed amount in the currency's smallest unit; negative for debits.
    pub amount: i64,
}

impl LedgerEntry {
    /// Create a credit entry. `amount` must be positive.
    pub fn credit(timestamp: i64, amount: i64) -> Self {
        Self { timestamp, amount }
    }

    /// Create a debit entry. `amount` must be positive; it is stored negated.
    pub fn debit(timestamp: i64, amount: i64) -> Self {
        Self {
            timestamp,
            amount: -amount,
        }
    }

    /// Get the entry direction.
    pub fn entry_type(&self) -> EntryType {
        if self.amount < 0 {
            EntryType::Debit
        } else {
            EntryType::Credit
        }
    }
}
