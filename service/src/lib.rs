//! Wallet Service
//!
//! The operation surface of the wallet core. A transport layer builds a
//! [`WalletService`] from a [`WalletServiceConfig`] at startup and calls its
//! five operations with the request types in [`messages`]; the service
//! validates the request, routes it to the [`CurrencyWallet`] for the
//! requested currency and returns a typed response or a [`WalletError`].
//!
//! [`CurrencyWallet`]: wallet_ledger::CurrencyWallet
//! [`WalletError`]: wallet_common::WalletError

pub mod config;
pub mod messages;
pub mod registry;
pub mod service;
pub mod telemetry;

pub use config::{TelemetryConfig, WalletServiceConfig};
pub use registry::WalletRegistry;
pub use service::WalletService;
