//! Service configuration.

use wallet_common::{Currency, Result, WalletError};
use wallet_ledger::{DepositPolicy, UnknownDepositPolicy};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}

/// Main wallet service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletServiceConfig {
    /// Currencies served, in order. Fixed for the life of the process.
    pub currencies: Vec<Currency>,
    /// Behaviour of deposits into users without a wallet.
    pub deposit_policy: DepositPolicy,
    /// Logging configuration.
    pub telemetry: TelemetryConfig,
}

impl Default for WalletServiceConfig {
    fn default() -> Self {
        Self {
            currencies: Currency::ALL.to_vec(),
            deposit_policy: DepositPolicy::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl WalletServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `WALLET_CURRENCIES` (comma separated codes),
    /// `WALLET_DEPOSIT_POLICY`, `LOG_LEVEL` and `LOG_FORMAT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(list) = lookup("WALLET_CURRENCIES") {
            config.currencies = list
                .split(',')
                .filter(|code| !code.trim().is_empty())
                .map(|code| {
                    code.parse::<Currency>()
                        .map_err(|e| WalletError::Configuration(e.to_string()))
                })
                .collect::<Result<Vec<_>>>()?;
        }

        if let Some(policy) = lookup("WALLET_DEPOSIT_POLICY") {
            config.deposit_policy = policy
                .parse()
                .map_err(|e: UnknownDepositPolicy| {
                    WalletError::Configuration(e.to_string())
                })?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            config.telemetry.log_level = level;
        }

        if let Some(format) = lookup("LOG_FORMAT") {
            config.telemetry.json = match format.trim().to_ascii_lowercase().as_str() {
                "json" => true,
                "text" | "pretty" => false,
                other => {
                    return Err(WalletError::Configuration(format!(
                        "unknown log format: {other}"
                    )))
                }
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if self.currencies.is_empty() {
            return Err(WalletError::Configuration(
                "at least one currency must be supported".to_string(),
            ));
        }

        for (i, currency) in self.currencies.iter().enumerate() {
            if self.currencies[..i].contains(currency) {
                return Err(WalletError::Configuration(format!(
                    "currency {currency} is listed more than once"
                )));
            }
        }

        Ok(())
    }
}
