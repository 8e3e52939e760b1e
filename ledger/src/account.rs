//! Per-user wallet state within one currency.

use wallet_common::{Currency, Result, UserId, WalletError};

use crate::balance::BalanceChange;
use crate::entry::LedgerEntry;
use crate::store::LedgerStore;

/// One user's balance and ledger in a single currency.
///
/// Mutations validate first and then update the balance and append the
/// ledger entry together, so a failed call leaves the account untouched.
#[derive(Debug, Clone)]
pub struct Account {
    user_id: UserId,
    currency: Currency,
    balance: i64,
    ledger: LedgerStore,
    created_at: i64,
}

impl Account {
    /// Open an empty account.
    pub fn new(user_id: UserId, currency: Currency, created_at: i64) -> Self {
        Self {
            user_id,
            currency,
            balance: 0,
            ledger: LedgerStore::new(),
            created_at,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Current balance.
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// The account's history.
    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    /// When the account was opened, in seconds since the epoch.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Check the balance against the ledger total.
    pub fn is_consistent(&self) -> bool {
        self.balance == self.ledger.sum()
    }

    /// Add `amount` to the balance and record a credit.
    pub fn credit(&mut self, amount: i64, timestamp: i64) -> Result<BalanceChange> {
        self.require_positive(amount)?;
        let balance_after = self.balance.checked_add(amount).ok_or_else(|| {
            WalletError::invalid(
                "amount",
                format!(
                    "deposit of {amount} would overflow the {} balance of user {}",
                    self.currency, self.user_id
                ),
            )
        })?;

        Ok(self.apply(LedgerEntry::credit(timestamp, amount), balance_after))
    }

    /// Subtract `amount` from the balance and record a debit.
    pub fn debit(&mut self, amount: i64, timestamp: i64) -> Result<BalanceChange> {
        self.require_positive(amount)?;
        if amount > self.balance {
            return Err(WalletError::InsufficientBalance {
                user_id: self.user_id.clone(),
                currency: self.currency,
                requested: amount,
                available: self.balance,
            });
        }

        let balance_after = self.balance - amount;
        Ok(self.apply(LedgerEntry::debit(timestamp, amount), balance_after))
    }

    fn apply(&mut self, entry: LedgerEntry, balance_after: i64) -> BalanceChange {
        let balance_before = self.balance;
        let entry = self.ledger.append(entry);
        self.balance = balance_after;

        BalanceChange {
            user_id: self.user_id.clone(),
            currency: self.currency,
            balance_before,
            balance_after,
            entry,
        }
    }

    fn require_positive(&self, amount: i64) -> Result<()> {
        if amount <= 0 {
            return Err(WalletError::invalid(
                "amount",
                format!("amount {amount} must be greater than zero"),
            ));
        }
        Ok(())
    }
}
