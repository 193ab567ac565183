//! Buy/sell exchange configuration.
//!
//! Lists the currencies the partner exchange widget supports and picks the
//! sandbox or production widget endpoints.

use std::env;

use crate::domain::StakeError;

/// Environment variable selecting the sandbox widget.
pub const SANDBOX_ENV: &str = "COINIFY_SANDBOX";

/// Currency ids that can be bought.
pub const SUPPORTED_BUY_CURRENCY_IDS: &[&str] = &[
    "bitcoin",
    "ethereum",
    "polkadot",
    "litecoin",
    "dogecoin",
    "bitcoin_cash",
    "dash",
    "stellar",
    "ethereum/erc20/usd_tether__erc20_",
    "ethereum/erc20/celsius",
    "ethereum/erc20/compound",
    "ethereum/erc20/makerdao",
    "ethereum/erc20/uniswap",
    "ethereum/erc20/link_chainlink",
];

/// Currency ids that can be sold.
pub const SUPPORTED_SELL_CURRENCY_IDS: &[&str] = &["bitcoin"];

// ============================================================================
// Exchange Mode
// ============================================================================

/// Direction of an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeMode {
    Buy,
    Sell,
}

impl std::str::FromStr for ExchangeMode {
    type Err = StakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            _ => Err(StakeError::invalid_input(format!(
                "exchange mode must be BUY or SELL, got '{s}'"
            ))),
        }
    }
}

/// Whether the exchange widget supports `currency_id` in `mode`.
#[must_use]
pub fn is_currency_supported(mode: ExchangeMode, currency_id: &str) -> bool {
    let supported = match mode {
        ExchangeMode::Buy => SUPPORTED_BUY_CURRENCY_IDS,
        ExchangeMode::Sell => SUPPORTED_SELL_CURRENCY_IDS,
    };
    supported.contains(&currency_id)
}

// ============================================================================
// Widget Config
// ============================================================================

/// Partner widget endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeConfig {
    pub host: &'static str,
    pub url: &'static str,
    pub partner_id: u32,
}

impl ExchangeConfig {
    #[must_use]
    pub const fn sandbox() -> Self {
        Self {
            host: "https://trade-ui.sandbox.coinify.com",
            url: "https://trade-ui.sandbox.coinify.com/widget",
            partner_id: 104,
        }
    }

    #[must_use]
    pub const fn production() -> Self {
        Self {
            host: "https://trade-ui.coinify.com",
            url: "https://trade-ui.coinify.com/widget",
            partner_id: 119,
        }
    }

    /// Sandbox when `sandbox_flag` is set to a non-empty value.
    #[must_use]
    pub fn select(sandbox_flag: Option<&str>) -> Self {
        match sandbox_flag {
            Some(flag) if !flag.is_empty() => Self::sandbox(),
            _ => Self::production(),
        }
    }
}

/// Widget config chosen from the `COINIFY_SANDBOX` environment variable.
#[must_use]
pub fn exchange_config() -> ExchangeConfig {
    ExchangeConfig::select(env::var(SANDBOX_ENV).ok().as_deref())
}

// ============================================================================
// Tests
// ============================================================================
