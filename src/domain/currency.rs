//! Currency, unit and explorer definitions.
//!
//! A currency carries the units its amounts can be displayed in and the
//! block explorers that can show its addresses.

use serde::{Deserialize, Serialize};

// ============================================================================
// Family
// ============================================================================

/// Blockchain family a currency, account or transaction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Solana and its SPL tokens.
    #[default]
    Solana,
    /// Bitcoin and forks sharing its transaction model.
    Bitcoin,
    /// Ethereum and EVM chains.
    Ethereum,
    /// Cosmos SDK chains.
    Cosmos,
    /// Polkadot relay chain.
    Polkadot,
}

impl Family {
    /// Returns the lowercase family identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Solana => "solana",
            Self::Bitcoin => "bitcoin",
            Self::Ethereum => "ethereum",
            Self::Cosmos => "cosmos",
            Self::Polkadot => "polkadot",
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Unit
// ============================================================================

/// A display unit for a currency.
///
/// `magnitude` is the number of decimal places between the smallest
/// on-chain denomination and this unit (9 for SOL over lamports).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Human readable unit name.
    pub name: String,
    /// Ticker-style code shown next to amounts.
    pub code: String,
    /// Decimal places between the base denomination and this unit.
    pub magnitude: u32,
}

impl Unit {
    /// Creates a new unit.
    #[must_use]
    pub fn new(name: impl Into<String>, code: impl Into<String>, magnitude: u32) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            magnitude,
        }
    }

    /// The SOL unit (9 decimals over lamports).
    #[cfg(test)]
    #[must_use]
    pub fn sol() -> Self {
        Self::new("SOL", "SOL", 9)
    }
}

// ============================================================================
// Explorer View
// ============================================================================

/// A block explorer able to display pages for a currency.
///
/// URL templates use `$address` and `$hash` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerView {
    /// Explorer display name.
    pub name: String,
    /// Template for address pages.
    #[serde(default)]
    pub address: Option<String>,
    /// Template for transaction pages.
    #[serde(default)]
    pub tx: Option<String>,
}

// ============================================================================
// Currency
// ============================================================================

/// A crypto currency as seen by an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Stable identifier (e.g., "solana", "ethereum/erc20/celsius").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ticker symbol.
    pub ticker: String,
    /// Family the currency belongs to.
    pub family: Family,
    /// Display units, the first being the default one.
    pub units: Vec<Unit>,
    /// Explorers in order of preference.
    #[serde(default)]
    pub explorer_views: Vec<ExplorerView>,
}

impl Currency {
    /// Returns the default display unit.
    ///
    /// Falls back to a zero-magnitude unit named after the ticker when the
    /// currency declares no units.
    #[must_use]
    pub fn default_unit(&self) -> Unit {
        self.units
            .first()
            .cloned()
            .unwrap_or_else(|| Unit::new(&self.ticker, &self.ticker, 0))
    }

    /// The Solana currency with its usual explorers.
    #[cfg(test)]
    #[must_use]
    pub fn solana() -> Self {
        Self {
            id: "solana".to_string(),
            name: "Solana".to_string(),
            ticker: "SOL".to_string(),
            family: Family::Solana,
            units: vec![Unit::sol(), Unit::new("lamports", "lamports", 0)],
            explorer_views: vec![ExplorerView {
                name: "Solana Explorer".to_string(),
                address: Some("https://explorer.solana.com/address/$address".to_string()),
                tx: Some("https://explorer.solana.com/tx/$hash".to_string()),
            }],
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_display_and_serde() {
        assert_eq!(Family::Solana.to_string(), "solana");
        let json = serde_json::to_string(&Family::Polkadot).unwrap();
        assert_eq!(json, "\"polkadot\"");
        let back: Family = serde_json::from_str("\"cosmos\"").unwrap();
        assert_eq!(back, Family::Cosmos);
    }

    #[test]
    fn test_default_unit() {
        assert_eq!(Currency::solana().default_unit(), Unit::sol());

        let bare = Currency {
            units: Vec::new(),
            ..Currency::solana()
        };
        let unit = bare.default_unit();
        assert_eq!(unit.code, "SOL");
        assert_eq!(unit.magnitude, 0);
    }
}
