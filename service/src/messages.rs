//! Request and response types of the wallet operations.
//!
//! Currencies travel as `i32` wire tags (`USD = 0`, `BTC = 1`, `ETC = 2`) so a
//! transport can forward whatever the client sent; unknown tags are rejected
//! by the service with `UnsupportedCurrency`.

use serde::{Deserialize, Serialize};

use wallet_common::WalletError;
use wallet_ledger::{HistoryPage, LedgerEntry};

/// Open a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWalletRequest {
    pub user_id: String,
    pub currency: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWalletResponse {
    pub user_id: String,
    /// Always zero.
    pub balance: i64,
    pub currency: i32,
}

/// Read a balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBalanceRequest {
    pub user_id: String,
    pub currency: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBalanceResponse {
    pub balance: i64,
    pub currency: i32,
}

/// Credit a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRequest {
    pub user_id: String,
    pub currency: i32,
    /// Smallest currency units; must be positive.
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositResponse {
    pub balance: i64,
    pub currency: i32,
}

/// Debit a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawRequest {
    pub user_id: String,
    pub currency: i32,
    /// Smallest currency units; must be positive.
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawResponse {
    pub balance: i64,
    pub currency: i32,
}

/// Read one page of transaction history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxnHistoryRequest {
    pub user_id: String,
    pub currency: i32,
    /// 1-based page number.
    pub page: i32,
    /// Entries per page.
    pub size: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxnHistoryResponse {
    pub user_id: String,
    pub currency: i32,
    /// Entries in the whole ledger at read time.
    pub total: u64,
    pub page: i32,
    pub size: i32,
    /// Entries on this page, oldest first.
    pub entries: Vec<TxnRecord>,
}

/// A ledger entry as seen by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxnRecord {
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    /// Positive for deposits, negative for withdrawals.
    pub amount: i64,
}

impl From<LedgerEntry> for TxnRecord {
    fn from(entry: LedgerEntry) -> Self {
        Self {
            timestamp: entry.timestamp,
            amount: entry.amount,
        }
    }
}

impl From<HistoryPage> for TxnHistoryResponse {
    fn from(page: HistoryPage) -> Self {
        Self {
            user_id: page.user_id.to_string(),
            currency: page.currency.tag(),
            total: page.total as u64,
            page: page.page,
            size: page.size,
            entries: page.entries.into_iter().map(TxnRecord::from).collect(),
        }
    }
}

/// Structured failure body for transports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable code, e.g. `NOT_FOUND`.
    pub code: String,
    /// Human-readable detail.
    pub message: String,
}

impl From<&WalletError> for ErrorResponse {
    fn from(err: &WalletError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
        }
    }
}
