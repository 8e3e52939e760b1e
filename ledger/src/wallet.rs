//! Concurrent balance and ledger store for one currency.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::{debug, info};

use wallet_common::{Clock, Currency, Result, SystemClock, UserId, WalletError};

use crate::account::Account;
use crate::history::{HistoryPage, PageRequest};

/// What a deposit into a user without a wallet does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepositPolicy {
    /// Open the wallet on the fly with a zero balance, then deposit.
    #[default]
    Lenient,
    /// Fail with `NotFound` until the wallet is created explicitly.
    RequireWallet,
}

impl fmt::Display for DepositPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepositPolicy::Lenient => write!(f, "lenient"),
            DepositPolicy::RequireWallet => write!(f, "require-wallet"),
        }
    }
}

/// Returned when a string does not name a deposit policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown deposit policy: {0} (expected `lenient` or `require-wallet`)")]
pub struct UnknownDepositPolicy(pub String);

impl FromStr for DepositPolicy {
    type Err = UnknownDepositPolicy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(DepositPolicy::Lenient),
            "require-wallet" | "require_wallet" | "strict" => Ok(DepositPolicy::RequireWallet),
            other => Err(UnknownDepositPolicy(other.to_string())),
        }
    }
}

type SharedAccount = Arc<RwLock<Account>>;

/// All users' balances and ledgers for a single currency.
///
/// Accounts live in a sharded map keyed by user. Each account sits behind
/// its own read-write lock that covers both the balance and the ledger, so
/// operations on different users never wait on each other and readers
/// always see a balance that matches the ledger. The map shard is only held
/// while looking up or inserting an account, never while an account lock is
/// held.
pub struct CurrencyWallet {
    /// Currency served by this wallet.
    currency: Currency,
    /// Accounts by owner.
    accounts: DashMap<UserId, SharedAccount>,
    /// Behaviour of deposits into unknown users.
    deposit_policy: DepositPolicy,
    /// Time source for ledger entries.
    clock: Arc<dyn Clock>,
}

impl CurrencyWallet {
    /// Create an empty wallet using the system clock and lenient deposits.
    pub fn new(currency: Currency) -> Self {
        Self::with_policy(currency, DepositPolicy::default())
    }

    /// Create an empty wallet with the given deposit policy.
    pub fn with_policy(currency: Currency, deposit_policy: DepositPolicy) -> Self {
        Self {
            currency,
            accounts: DashMap::new(),
            deposit_policy,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn deposit_policy(&self) -> DepositPolicy {
        self.deposit_policy
    }

    /// Number of wallets opened in this currency.
    pub fn wallet_count(&self) -> usize {
        self.accounts.len()
    }

    /// Whether `user_id` has a wallet in this currency.
    pub fn contains(&self, user_id: &UserId) -> bool {
        self.accounts.contains_key(user_id)
    }

    /// Open a wallet with a zero balance and an empty ledger.
    pub fn create_wallet(&self, user_id: &UserId) -> Result<i64> {
        match self.accounts.entry(user_id.clone()) {
            Entry::Occupied(_) => Err(WalletError::AlreadyExists {
                user_id: user_id.clone(),
                currency: self.currency,
            }),
            Entry::Vacant(slot) => {
                slot.insert(self.open_account(user_id));
                info!(user = %user_id, currency = %self.currency, "Wallet created");
                Ok(0)
            }
        }
    }

    /// Current balance of `user_id`.
    pub fn get_balance(&self, user_id: &UserId) -> Result<i64> {
        let account = self.account(user_id)?;
        let balance = account.read().balance();
        Ok(balance)
    }

    /// Credit `amount` and record it in the ledger. Returns the new balance.
    pub fn deposit(&self, user_id: &UserId, amount: i64) -> Result<i64> {
        if amount <= 0 {
            return Err(WalletError::invalid(
                "amount",
                format!("deposit amount {amount} must be greater than zero"),
            ));
        }

        let account = match self.deposit_policy {
            DepositPolicy::Lenient => self.account_or_open(user_id),
            DepositPolicy::RequireWallet => self.account(user_id)?,
        };

        let change = account.write().credit(amount, self.clock.now_unix())?;

        debug!(
            user = %user_id,
            currency = %self.currency,
            amount,
            balance = change.balance_after,
            "Deposit applied"
        );
        Ok(change.balance_after)
    }

    /// Debit `amount` and record it in the ledger. Returns the new balance.
    pub fn withdraw(&self, user_id: &UserId, amount: i64) -> Result<i64> {
        let account = self.account(user_id)?;
        let change = account.write().debit(amount, self.clock.now_unix())?;

        debug!(
            user = %user_id,
            currency = %self.currency,
            amount,
            balance = change.balance_after,
            "Withdrawal applied"
        );
        Ok(change.balance_after)
    }

    /// Read one page of `user_id`'s history, oldest entries first.
    pub fn txn_history(&self, user_id: &UserId, page: i32, size: i32) -> Result<HistoryPage> {
        let request = PageRequest::new(page, size)?;
        let account = self.account(user_id)?;
        let guard = account.read();
        request.read(user_id, self.currency, guard.ledger())
    }

    /// Check that `user_id`'s balance equals the sum of its ledger.
    pub fn verify_integrity(&self, user_id: &UserId) -> Result<bool> {
        let account = self.account(user_id)?;
        let consistent = account.read().is_consistent();
        Ok(consistent)
    }

    fn account(&self, user_id: &UserId) -> Result<SharedAccount> {
        self.accounts
            .get(user_id)
            .map(|account| Arc::clone(account.value()))
            .ok_or_else(|| WalletError::NotFound {
                user_id: user_id.clone(),
                currency: self.currency,
            })
    }

    fn account_or_open(&self, user_id: &UserId) -> SharedAccount {
        if let Some(account) = self.accounts.get(user_id) {
            return Arc::clone(account.value());
        }

        let slot = self
            .accounts
            .entry(user_id.clone())
            .or_insert_with(|| {
                info!(user = %user_id, currency = %self.currency, "Wallet opened by deposit");
                self.open_account(user_id)
            });
        Arc::clone(slot.value())
    }

    fn open_account(&self, user_id: &UserId) -> SharedAccount {
        Arc::new(RwLock::new(Account::new(
            user_id.clone(),
            self.currency,
            self.clock.now_unix(),
        )))
    }
}

impl fmt::Debug for CurrencyWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyWallet")
            .field("currency", &self.currency)
            .field("wallets", &self.accounts.len())
            .field("deposit_policy", &self.deposit_policy)
            .finish()
    }
}
