//! Routing of operations to per-currency wallets.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use wallet_common::{Clock, Currency, Result, SystemClock, WalletError};
use wallet_ledger::CurrencyWallet;

use crate::config::WalletServiceConfig;

/// One [`CurrencyWallet`] per supported currency.
///
/// Built once at startup; the set of currencies never changes afterwards,
/// so lookups need no locking.
#[derive(Debug)]
pub struct WalletRegistry {
    /// Supported currencies in configured order.
    currencies: Vec<Currency>,
    /// Wallets by currency.
    wallets: HashMap<Currency, CurrencyWallet>,
}

impl WalletRegistry {
    /// Build the registry described by `config`.
    pub fn new(config: &WalletServiceConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Build the registry with a custom time source shared by all wallets.
    pub fn with_clock(config: &WalletServiceConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;

        let wallets = config
            .currencies
            .iter()
            .map(|&currency| {
                let wallet = CurrencyWallet::with_policy(currency, config.deposit_policy)
                    .with_clock(Arc::clone(&clock));
                (currency, wallet)
            })
            .collect();

        info!(
            currencies = ?config.currencies,
            deposit_policy = %config.deposit_policy,
            "Wallet registry initialized"
        );

        Ok(Self {
            currencies: config.currencies.clone(),
            wallets,
        })
    }

    /// The wallet serving `currency`.
    pub fn resolve(&self, currency: Currency) -> Result<&CurrencyWallet> {
        self.wallets
            .get(&currency)
            .ok_or_else(|| WalletError::unsupported(currency))
    }

    /// The wallet serving the currency with wire tag `tag`.
    pub fn resolve_tag(&self, tag: i32) -> Result<&CurrencyWallet> {
        let currency = Currency::from_tag(tag).ok_or_else(|| WalletError::unsupported(tag))?;
        self.resolve(currency)
    }

    /// Supported currencies in configured order.
    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    pub fn supports(&self, currency: Currency) -> bool {
        self.wallets.contains_key(&currency)
    }
}
