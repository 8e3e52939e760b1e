//! Error types for wallet operations.

use crate::{Currency, UserId};
use thiserror::Error;

/// Main error type for wallet operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// Currency is not served by this process.
    #[error("{currency} wallet is not available")]
    UnsupportedCurrency { currency: String },

    /// A wallet already exists for the user in this currency.
    #[error("user {user_id} already has a {currency} wallet")]
    AlreadyExists { user_id: UserId, currency: Currency },

    /// No wallet exists for the user in this currency.
    #[error("user {user_id} does not have a {currency} wallet")]
    NotFound { user_id: UserId, currency: Currency },

    /// Withdrawal exceeds the current balance.
    #[error("insufficient balance in {currency} wallet of user {user_id}: requested {requested}, available {available}")]
    InsufficientBalance {
        user_id: UserId,
        currency: Currency,
        requested: i64,
        available: i64,
    },

    /// Request field failed validation.
    #[error("{field} is not valid: {message}")]
    InvalidArgument { field: &'static str, message: String },

    /// Requested history page starts past the last entry.
    #[error("no more data is available: page {page} of size {size} starts past {total} entries")]
    OutOfRange { page: i32, size: i32, total: usize },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Coarse classification of a [`WalletError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnsupportedCurrency,
    AlreadyExists,
    NotFound,
    InsufficientBalance,
    InvalidArgument,
    OutOfRange,
    Configuration,
}

impl WalletError {
    /// Shorthand for an [`WalletError::InvalidArgument`].
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        WalletError::InvalidArgument {
            field,
            message: message.into(),
        }
    }

    /// Shorthand for an [`WalletError::UnsupportedCurrency`].
    pub fn unsupported(currency: impl ToString) -> Self {
        WalletError::UnsupportedCurrency {
            currency: currency.to_string(),
        }
    }

    /// Get the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WalletError::UnsupportedCurrency { .. } => ErrorKind::UnsupportedCurrency,
            WalletError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            WalletError::NotFound { .. } => ErrorKind::NotFound,
            WalletError::InsufficientBalance { .. } => ErrorKind::InsufficientBalance,
            WalletError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            WalletError::OutOfRange { .. } => ErrorKind::OutOfRange,
            WalletError::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// Wallet failures are final; the core never retries them.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Get error code for response messages.
    pub fn error_code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::UnsupportedCurrency => "UNSUPPORTED_CURRENCY",
            ErrorKind::AlreadyExists => "ALREADY_EXISTS",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::InsufficientBalance => "INSUFFICIENT_BALANCE",
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::OutOfRange => "OUT_OF_RANGE",
            ErrorKind::Configuration => "CONFIGURATION_ERROR",
        }
    }
}

/// Result type alias for wallet operations.
pub type Result<T> = std::result::Result<T, WalletError>;
