//! Wallet Core Common Types
//!
//! Shared types used across the wallet core: the supported currencies,
//! user identifiers, the error taxonomy and the clock used to stamp
//! ledger entries.

pub mod currency;
pub mod identifiers;
pub mod error;
pub mod time;

pub use currency::*;
pub use identifiers::*;
pub use error::*;
pub use time::{Clock, ManualClock, SystemClock};
