//! Append-only ledger storage.

use crate::entry::LedgerEntry;

/// Entries read from a [`LedgerStore`] together with its size at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSlice {
    /// Entries in the requested window, in append order.
    pub entries: Vec<LedgerEntry>,
    /// Number of entries in the store when the window was read.
    pub total: usize,
}

/// Append-only, time-ordered sequence of ledger entries for one user in one
/// currency.
///
/// The store does no locking of its own. It lives inside an
/// [`Account`](crate::Account), whose lock also covers the balance.
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    entries: Vec<LedgerEntry>,
}

impl LedgerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return it as stored.
    ///
    /// Timestamps never go backwards: an entry stamped earlier than the
    /// current tail takes the tail's timestamp.
    pub fn append(&mut self, mut entry: LedgerEntry) -> LedgerEntry {
        if let Some(last) = self.last_timestamp() {
            entry.timestamp = entry.timestamp.max(last);
        }
        self.entries.push(entry);
        entry
    }

    /// Entries in `[start, end)`, clamped to the current bounds.
    pub fn slice(&self, start: usize, end: usize) -> LedgerSlice {
        let total = self.entries.len();
        let start = start.min(total);
        let end = end.clamp(start, total);
        LedgerSlice {
            entries: self.entries[start..end].to_vec(),
            total,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Running total of every entry amount.
    pub fn sum(&self) -> i64 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Timestamp of the most recent entry.
    pub fn last_timestamp(&self) -> Option<i64> {
        self.entries.last().map(|e| e.timestamp)
    }

    /// Iterate entries in append order.
    pub fn iter(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(amounts: &[i64]) -> LedgerStore {
        let mut store = LedgerStore::new();
        for (i, amount) in amounts.iter().enumerate() {
            store.append(LedgerEntry {
                timestamp: 100 + i as i64,
                amount: *amount,
            });
        }
        store
    }

    #[test]
    fn test_slice_clamps_to_bounds() {
        let store = store_with(&[10, 20, 30]);

        let window = store.slice(1, 10);
        assert_eq!(window.total, 3);
        assert_eq!(
            window.entries.iter().map(|e| e.amount).collect::<Vec<_>>(),
            vec![20, 30]
        );

        let past_end = store.slice(5, 8);
        assert!(past_end.entries.is_empty());
        assert_eq!(past_end.total, 3);

        let inverted = store.slice(2, 1);
        assert!(inverted.entries.is_empty());
    }

    #[test]
    fn test_timestamps_never_go_backwards() {
        let mut store = LedgerStore::new();
        store.append(LedgerEntry::credit(200, 5));
        let stored = store.append(LedgerEntry::credit(150, 5));

        assert_eq!(stored.timestamp, 200);
        assert_eq!(store.last_timestamp(), Some(200));
    }

    #[test]
    fn test_sum() {
        let store = store_with(&[100, -80, 5]);
        assert_eq!(store.sum(), 25);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
        assert!(LedgerStore::new().is_empty());
    }
}
