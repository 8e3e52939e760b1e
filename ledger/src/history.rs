//! Paginated views of a ledger.

use serde::{Deserialize, Serialize};
use wallet_common::{Currency, Result, UserId, WalletError};

use crate::entry::LedgerEntry;
use crate::store::LedgerStore;

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i32,
    size: i32,
}

impl PageRequest {
    /// Validate `page` and `size`; both must be at least 1.
    pub fn new(page: i32, size: i32) -> Result<Self> {
        if page < 1 {
            return Err(WalletError::invalid(
                "page",
                format!("page {page} must be at least 1"),
            ));
        }
        if size < 1 {
            return Err(WalletError::invalid(
                "size",
                format!("size {size} must be at least 1"),
            ));
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> i32 {
        self.page
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Index of the first entry on this page.
    pub fn start(&self) -> u64 {
        self.size as u64 * (self.page as u64 - 1)
    }

    /// Index one past the last entry on this page.
    pub fn end(&self) -> u64 {
        self.size as u64 * self.page as u64
    }

    /// Cut this page out of `ledger`.
    ///
    /// Fails with `OutOfRange` when the page starts at or past the end.
    pub fn read(
        &self,
        user_id: &UserId,
        currency: Currency,
        ledger: &LedgerStore,
    ) -> Result<HistoryPage> {
        let total = ledger.len();
        if self.start() >= total as u64 {
            return Err(WalletError::OutOfRange {
                page: self.page,
                size: self.size,
                total,
            });
        }

        // start < total, so it fits in usize; end is clamped by the store.
        let start = self.start() as usize;
        let end = usize::try_from(self.end()).unwrap_or(usize::MAX);
        let slice = ledger.slice(start, end);

        Ok(HistoryPage {
            user_id: user_id.clone(),
            currency,
            total: slice.total,
            page: self.page,
            size: self.size,
            entries: slice.entries,
        })
    }
}

/// One page of a user's transaction history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPage {
    pub user_id: UserId,
    pub currency: Currency,
    /// Entries in the whole ledger at read time.
    pub total: usize,
    pub page: i32,
    pub size: i32,
    /// Entries on this page, oldest first.
    pub entries: Vec<LedgerEntry>,
}

impl HistoryPage {
    /// Whether later pages hold more entries.
    pub fn has_more(&self) -> bool {
        (self.page as u64 * self.size as u64) < self.total as u64
    }
}
