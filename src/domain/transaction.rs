//! Transaction drafts awaiting confirmation.
//!
//! Transactions are a tagged union over families. The Solana variant carries
//! a [`TransactionMode`] and mode-dependent fields; accessors hide fields the
//! active mode does not use, even if they are populated in the draft.

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::amount::decimal_string;
use super::currency::Family;

// ============================================================================
// Transaction Mode
// ============================================================================

/// The semantic action a Solana transaction encodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TransactionMode {
    /// Plain transfer.
    #[default]
    Send,
    /// Delegate stake to a validator.
    Delegate,
    /// Deactivate stake.
    Undelegate,
    /// Move stake from one validator to another.
    Redelegate,
    /// Withdraw pending rewards.
    ClaimReward,
    /// Withdraw and re-stake pending rewards.
    ClaimRewardCompound,
    /// Any mode string this crate does not know.
    Other(String),
}

impl TransactionMode {
    /// Parses a mode string. Unknown strings become [`TransactionMode::Other`].
    #[must_use]
    pub fn parse(mode: &str) -> Self {
        match mode {
            "send" => Self::Send,
            "delegate" => Self::Delegate,
            "undelegate" => Self::Undelegate,
            "redelegate" => Self::Redelegate,
            "claimReward" => Self::ClaimReward,
            "claimRewardCompound" => Self::ClaimRewardCompound,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the wire string for this mode.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Send => "send",
            Self::Delegate => "delegate",
            Self::Undelegate => "undelegate",
            Self::Redelegate => "redelegate",
            Self::ClaimReward => "claimReward",
            Self::ClaimRewardCompound => "claimRewardCompound",
            Self::Other(mode) => mode,
        }
    }

    /// Whether this mode acts on stake (delegation, undelegation, claims).
    #[must_use]
    pub const fn is_staking(&self) -> bool {
        matches!(
            self,
            Self::Delegate
                | Self::Undelegate
                | Self::Redelegate
                | Self::ClaimReward
                | Self::ClaimRewardCompound
        )
    }
}

impl std::fmt::Display for TransactionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TransactionMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransactionMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

// ============================================================================
// Solana Transaction
// ============================================================================

/// A validator targeted by a staking transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorRef {
    /// Vote account address.
    pub address: String,
    /// Amount in lamports.
    #[serde(with = "decimal_string")]
    pub amount: BigUint,
}

impl ValidatorRef {
    #[must_use]
    pub fn new(address: impl Into<String>, amount: impl Into<BigUint>) -> Self {
        Self {
            address: address.into(),
            amount: amount.into(),
        }
    }
}

/// A Solana transaction draft.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolanaTransaction {
    /// Active mode.
    pub mode: TransactionMode,
    /// Transfer amount in lamports.
    #[serde(default, with = "decimal_string")]
    pub amount: BigUint,
    /// Transfer recipient.
    #[serde(default)]
    pub recipient: String,
    #[serde(default)]
    validators: Vec<ValidatorRef>,
    #[serde(default, rename = "solanaSourceValidator")]
    source_validator: Option<String>,
    #[serde(default)]
    memo: Option<String>,
}

impl SolanaTransaction {
    /// Creates an empty draft in the given mode.
    #[cfg(test)]
    #[must_use]
    pub fn new(mode: TransactionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Sets the targeted validators.
    #[cfg(test)]
    #[must_use]
    pub fn with_validators(mut self, validators: Vec<ValidatorRef>) -> Self {
        self.validators = validators;
        self
    }

    /// Sets the redelegation source validator.
    #[cfg(test)]
    #[must_use]
    pub fn with_source_validator(mut self, address: impl Into<String>) -> Self {
        self.source_validator = Some(address.into());
        self
    }

    /// Sets the memo.
    #[cfg(test)]
    #[must_use]
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Targeted validators, empty unless the mode is a staking mode.
    #[must_use]
    pub fn validators(&self) -> &[ValidatorRef] {
        if self.mode.is_staking() {
            &self.validators
        } else {
            &[]
        }
    }

    /// Redelegation source, only present in [`TransactionMode::Redelegate`].
    #[must_use]
    pub fn source_validator(&self) -> Option<&str> {
        match self.mode {
            TransactionMode::Redelegate => self.source_validator.as_deref(),
            _ => None,
        }
    }

    /// Memo attached to the transaction; empty memos count as absent.
    #[must_use]
    pub fn memo(&self) -> Option<&str> {
        self.memo.as_deref().filter(|m| !m.is_empty())
    }

    /// Points the first validator slot at `address`, keeping its amount.
    ///
    /// This is how a flow writes a selector choice back into its own draft.
    pub fn set_validator_address(&mut self, address: impl Into<String>) {
        let address = address.into();
        match self.validators.first_mut() {
            Some(first) => first.address = address,
            None => self.validators.push(ValidatorRef::new(address, 0u8)),
        }
    }
}

// ============================================================================
// Transaction
// ============================================================================

/// A transaction of a family without a dedicated view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericTransaction {
    /// The family the transaction belongs to.
    pub family: Family,
    /// Transfer recipient.
    #[serde(default)]
    pub recipient: String,
    /// Transfer amount in the base denomination.
    #[serde(default, with = "decimal_string")]
    pub amount: BigUint,
}

/// Transaction draft tagged by family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    /// A Solana transaction.
    Solana(SolanaTransaction),
    /// Any other family.
    Other(GenericTransaction),
}

impl Transaction {
    /// The family of this transaction.
    #[must_use]
    pub const fn family(&self) -> Family {
        match self {
            Self::Solana(_) => Family::Solana,
            Self::Other(tx) => tx.family,
        }
    }

    /// The Solana variant, if this is one.
    #[must_use]
    pub const fn as_solana(&self) -> Option<&SolanaTransaction> {
        match self {
            Self::Solana(tx) => Some(tx),
            Self::Other(_) => None,
        }
    }
}

// Snapshots carry `"family": "solana"` next to the other fields, so the
// two variants are told apart by that tag rather than by serde's enum form.
impl Serialize for Transaction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Solana(tx) => {
                #[derive(Serialize)]
                struct Tagged<'a> {
                    family: Family,
                    #[serde(flatten)]
                    tx: &'a SolanaTransaction,
                }
                Tagged {
                    family: Family::Solana,
                    tx,
                }
                .serialize(serializer)
            }
            Self::Other(tx) => tx.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Transaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let family = value
            .get("family")
            .cloned()
            .ok_or_else(|| serde::de::Error::missing_field("family"))?;
        let family: Family = serde_json::from_value(family).map_err(serde::de::Error::custom)?;

        match family {
            Family::Solana => serde_json::from_value(value)
                .map(Self::Solana)
                .map_err(serde::de::Error::custom),
            _ => serde_json::from_value(value)
                .map(Self::Other)
                .map_err(serde::de::Error::custom),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
