//! Helpers shared by the integration tests.

#![allow(dead_code)]

use wallet_common::{Currency, Result};
use wallet_service::messages::*;
use wallet_service::{WalletService, WalletServiceConfig};

pub const USD: i32 = 0;

pub fn service() -> WalletService {
    assert_eq!(Currency::Usd.tag(), USD);
    WalletService::new(&WalletServiceConfig::default()).expect("default config is valid")
}

pub fn create(service: &WalletService, user: &str, currency: i32) -> Result<CreateWalletResponse> {
    service.create_wallet(CreateWalletRequest {
        user_id: user.to_string(),
        currency,
    })
}

pub fn balance(service: &WalletService, user: &str, currency: i32) -> Result<GetBalanceResponse> {
    service.get_balance(GetBalanceRequest {
        user_id: user.to_string(),
        currency,
    })
}

pub fn deposit(
    service: &WalletService,
    user: &str,
    currency: i32,
    amount: i64,
) -> Result<DepositResponse> {
    service.deposit(DepositRequest {
        user_id: user.to_string(),
        currency,
        amount,
    })
}

pub fn withdraw(
    service: &WalletService,
    user: &str,
    currency: i32,
    amount: i64,
) -> Result<WithdrawResponse> {
    service.withdraw(WithdrawRequest {
        user_id: user.to_string(),
        currency,
        amount,
    })
}

pub fn history(
    service: &WalletService,
    user: &str,
    currency: i32,
    page: i32,
    size: i32,
) -> Result<TxnHistoryResponse> {
    service.txn_history(TxnHistoryRequest {
        user_id: user.to_string(),
        currency,
        page,
        size,
    })
}

/// Every entry of a user's ledger, read page by page.
pub fn full_history(
    service: &WalletService,
    user: &str,
    currency: i32,
    size: i32,
) -> Result<Vec<TxnRecord>> {
    let mut entries = Vec::new();
    let mut page = 1;
    loop {
        let response = history(service, user, currency, page, size)?;
        entries.extend(response.entries);
        if entries.len() as u64 >= response.total {
            return Ok(entries);
        }
        page += 1;
    }
}
