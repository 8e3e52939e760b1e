//! Concurrent callers against one shared service.

mod common;

use std::sync::Arc;

use anyhow::Result;
use wallet_common::{Currency, ErrorKind, UserId};
use wallet_service::WalletService;

use common::{balance, create, deposit, full_history, history, service, withdraw, USD};

fn shared() -> Arc<WalletService> {
    Arc::new(service())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_deposits_lose_no_updates() -> Result<()> {
    const N: i64 = 1_000;
    let service = shared();
    create(&service, "user1", USD)?;

    let handles: Vec<_> = (0..N)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { deposit(&service, "user1", USD, 1).map(|r| r.balance) })
        })
        .collect();
    for handle in handles {
        handle.await??;
    }

    assert_eq!(balance(&service, "user1", USD)?.balance, N);
    let entries = full_history(&service, "user1", USD, 64)?;
    assert_eq!(entries.len() as i64, N);
    assert!(entries.iter().all(|e| e.amount == 1));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_withdrawals_never_overdraw() -> Result<()> {
    let service = shared();
    create(&service, "user1", USD)?;
    deposit(&service, "user1", USD, 100)?;

    let handles: Vec<_> = (0..300)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { withdraw(&service, "user1", USD, 1) })
        })
        .collect();

    let mut succeeded = 0;
    for handle in handles {
        match handle.await? {
            Ok(response) => {
                assert!(response.balance >= 0);
                succeeded += 1;
            }
            Err(err) => assert_eq!(err.kind(), ErrorKind::InsufficientBalance),
        }
    }

    assert_eq!(succeeded, 100);
    assert_eq!(balance(&service, "user1", USD)?.balance, 0);
    assert_eq!(history(&service, "user1", USD, 1, 1_000)?.total, 101);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_create_has_one_winner() -> Result<()> {
    let service = shared();

    let handles: Vec<_> = (0..64)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { create(&service, "user1", USD) })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        match handle.await? {
            Ok(_) => created += 1,
            Err(err) => assert_eq!(err.kind(), ErrorKind::AlreadyExists),
        }
    }
    assert_eq!(created, 1);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_readers_see_balance_matching_ledger() -> Result<()> {
    let service = shared();
    create(&service, "user1", USD)?;
    deposit(&service, "user1", USD, 1)?;

    let writers: Vec<_> = (0..4)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                for _ in 0..250 {
                    if i % 2 == 0 {
                        deposit(&service, "user1", USD, 3)?;
                    } else {
                        // May fail when the balance runs dry; that is fine.
                        let _ = withdraw(&service, "user1", USD, 2);
                    }
                }
                wallet_common::Result::Ok(())
            })
        })
        .collect();

    let reader = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            let wallet = service.registry().resolve(Currency::Usd)?;
            let user = UserId::new("user1");
            for _ in 0..500 {
                assert!(wallet.verify_integrity(&user)?);
            }
            wallet_common::Result::Ok(())
        })
    };

    for writer in writers {
        writer.await??;
    }
    reader.await??;

    let wallet = service.registry().resolve(Currency::Usd)?;
    assert!(wallet.verify_integrity(&UserId::new("user1"))?);

    let entries = full_history(&service, "user1", USD, 100)?;
    let sum: i64 = entries.iter().map(|e| e.amount).sum();
    assert_eq!(sum, balance(&service, "user1", USD)?.balance);
    assert!(entries.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_users_and_currencies_are_independent() -> Result<()> {
    let service = shared();
    let currencies = [Currency::Usd, Currency::Btc, Currency::Etc];

    let handles: Vec<_> = (0..30)
        .map(|i| {
            let service = Arc::clone(&service);
            let currency = currencies[i % currencies.len()].tag();
            let user = format!("user{}", i / currencies.len());
            tokio::spawn(async move {
                create(&service, &user, currency)?;
                for _ in 0..50 {
                    deposit(&service, &user, currency, 2)?;
                }
                withdraw(&service, &user, currency, 10)
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await??.balance, 90);
    }

    for currency in currencies {
        assert_eq!(service.registry().resolve(currency)?.wallet_count(), 10);
    }
    Ok(())
}
