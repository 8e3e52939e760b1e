//! Public wallet operations.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use wallet_common::{Clock, Result, UserId, WalletError};
use wallet_ledger::CurrencyWallet;

use crate::config::WalletServiceConfig;
use crate::messages::{
    CreateWalletRequest, CreateWalletResponse, DepositRequest, DepositResponse,
    GetBalanceRequest, GetBalanceResponse, TxnHistoryRequest, TxnHistoryResponse,
    WithdrawRequest, WithdrawResponse,
};
use crate::registry::WalletRegistry;

/// The wallet operation surface.
///
/// Validates request shape and delegates to the [`CurrencyWallet`] for the
/// requested currency. Holds no mutable state of its own, so one instance
/// can be shared (e.g. behind an `Arc`) by every transport worker.
#[derive(Debug)]
pub struct WalletService {
    registry: WalletRegistry,
}

impl WalletService {
    /// Create a service from configuration.
    pub fn new(config: &WalletServiceConfig) -> Result<Self> {
        Ok(Self::from_registry(WalletRegistry::new(config)?))
    }

    /// Create a service whose ledger timestamps come from `clock`.
    pub fn with_clock(config: &WalletServiceConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        Ok(Self::from_registry(WalletRegistry::with_clock(config, clock)?))
    }

    pub fn from_registry(registry: WalletRegistry) -> Self {
        info!(currencies = registry.currencies().len(), "Wallet service ready");
        Self { registry }
    }

    pub fn registry(&self) -> &WalletRegistry {
        &self.registry
    }

    /// Open a wallet with a zero balance.
    #[instrument(skip(self, request), fields(user = %request.user_id, currency = request.currency))]
    pub fn create_wallet(&self, request: CreateWalletRequest) -> Result<CreateWalletResponse> {
        let result = self
            .route(request.currency, &request.user_id)
            .and_then(|(wallet, user_id)| wallet.create_wallet(&user_id))
            .map(|balance| CreateWalletResponse {
                user_id: request.user_id.clone(),
                balance,
                currency: request.currency,
            });
        observe("create_wallet", result)
    }

    /// Read the current balance.
    #[instrument(skip(self, request), fields(user = %request.user_id, currency = request.currency))]
    pub fn get_balance(&self, request: GetBalanceRequest) -> Result<GetBalanceResponse> {
        let result = self
            .route(request.currency, &request.user_id)
            .and_then(|(wallet, user_id)| wallet.get_balance(&user_id))
            .map(|balance| GetBalanceResponse {
                balance,
                currency: request.currency,
            });
        observe("get_balance", result)
    }

    /// Credit the wallet and record the deposit.
    #[instrument(skip(self, request), fields(user = %request.user_id, currency = request.currency, amount = request.amount))]
    pub fn deposit(&self, request: DepositRequest) -> Result<DepositResponse> {
        let result = self
            .route(request.currency, &request.user_id)
            .and_then(|route| require_positive(request.amount).map(|()| route))
            .and_then(|(wallet, user_id)| wallet.deposit(&user_id, request.amount))
            .map(|balance| DepositResponse {
                balance,
                currency: request.currency,
            });
        observe("deposit", result)
    }

    /// Debit the wallet and record the withdrawal.
    #[instrument(skip(self, request), fields(user = %request.user_id, currency = request.currency, amount = request.amount))]
    pub fn withdraw(&self, request: WithdrawRequest) -> Result<WithdrawResponse> {
        let result = self
            .route(request.currency, &request.user_id)
            .and_then(|route| require_positive(request.amount).map(|()| route))
            .and_then(|(wallet, user_id)| wallet.withdraw(&user_id, request.amount))
            .map(|balance| WithdrawResponse {
                balance,
                currency: request.currency,
            });
        observe("withdraw", result)
    }

    /// Read one page of transaction history.
    #[instrument(skip(self, request), fields(user = %request.user_id, currency = request.currency, page = request.page, size = request.size))]
    pub fn txn_history(&self, request: TxnHistoryRequest) -> Result<TxnHistoryResponse> {
        let result = self
            .route(request.currency, &request.user_id)
            .and_then(|(wallet, user_id)| wallet.txn_history(&user_id, request.page, request.size))
            .map(TxnHistoryResponse::from);
        observe("txn_history", result)
    }

    fn route(&self, currency: i32, user_id: &str) -> Result<(&CurrencyWallet, UserId)> {
        let wallet = self.registry.resolve_tag(currency)?;
        let user_id = UserId::new(user_id);
        if !user_id.is_valid() {
            return Err(WalletError::invalid("user_id", "user id must not be empty"));
        }
        Ok((wallet, user_id))
    }
}

fn require_positive(amount: i64) -> Result<()> {
    if amount <= 0 {
        return Err(WalletError::invalid(
            "amount",
            format!("amount {amount} must be greater than zero"),
        ));
    }
    Ok(())
}

fn observe<T>(operation: &'static str, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        warn!(operation, code = err.error_code(), error = %err, "Wallet operation rejected");
    }
    result
}
