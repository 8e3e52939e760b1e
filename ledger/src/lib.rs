//! Wallet Ledger
//!
//! Per-currency store of user balances and their append-only ledgers.
//! A [`CurrencyWallet`] keeps every user's balance and history behind a
//! per-user lock so that a balance change and its ledger entry are always
//! observed together.

pub mod entry;
pub mod store;
pub mod account;
pub mod balance;
pub mod history;
pub mod wallet;

pub use entry::{EntryType, LedgerEntry};
pub use store::{LedgerSlice, LedgerStore};
pub use account::Account;
pub use balance::BalanceChange;
pub use history::{HistoryPage, PageRequest};
pub use wallet::{CurrencyWallet, DepositPolicy, UnknownDepositPolicy};
