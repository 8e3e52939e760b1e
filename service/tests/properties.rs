//! Property tests over random operation sequences.

mod common;

use proptest::prelude::*;
use wallet_common::{Currency, ErrorKind, UserId};

use common::{balance, create, deposit, full_history, history, service, withdraw, USD};

#[derive(Debug, Clone, Copy)]
enum Op {
    Deposit(i64),
    Withdraw(i64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1i64..1_000).prop_map(Op::Deposit),
        (1i64..1_500).prop_map(Op::Withdraw),
    ]
}

proptest! {
    #[test]
    fn prop_balance_matches_ledger_and_model(ops in prop::collection::vec(op(), 1..60)) {
        let service = service();
        create(&service, "user1", USD).unwrap();
        let wallet = service.registry().resolve(Currency::Usd).unwrap();
        let user = UserId::new("user1");

        let mut expected = 0i64;
        let mut applied = 0u64;
        for op in ops {
            match op {
                Op::Deposit(amount) => {
                    expected += amount;
                    applied += 1;
                    prop_assert_eq!(deposit(&service, "user1", USD, amount).unwrap().balance, expected);
                }
                Op::Withdraw(amount) => match withdraw(&service, "user1", USD, amount) {
                    Ok(response) => {
                        expected -= amount;
                        applied += 1;
                        prop_assert_eq!(response.balance, expected);
                    }
                    Err(err) => {
                        prop_assert_eq!(err.kind(), ErrorKind::InsufficientBalance);
                        prop_assert!(amount > expected);
                    }
                },
            }
            prop_assert!(wallet.verify_integrity(&user).unwrap());
        }

        let first = balance(&service, "user1", USD).unwrap().balance;
        let second = balance(&service, "user1", USD).unwrap().balance;
        prop_assert_eq!(first, expected);
        prop_assert_eq!(first, second);

        if applied > 0 {
            prop_assert_eq!(history(&service, "user1", USD, 1, 1).unwrap().total, applied);
        }
        prop_assert!(expected >= 0);
    }

    #[test]
    fn prop_pages_reassemble_ledger(
        amounts in prop::collection::vec(1i64..100, 1..80),
        size in 1i32..15,
    ) {
        let service = service();
        for amount in &amounts {
            deposit(&service, "user1", USD, *amount).unwrap();
        }

        let entries = full_history(&service, "user1", USD, size).unwrap();
        let replayed: Vec<i64> = entries.iter().map(|e| e.amount).collect();
        prop_assert_eq!(&replayed, &amounts);

        let pages = (amounts.len() as i32 + size - 1) / size;
        let err = history(&service, "user1", USD, pages + 1, size).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }
}
