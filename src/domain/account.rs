//! Account and delegation types.
//!
//! Accounts and their stake delegations are owned by the chain-state sync
//! layer; this crate only reads them from a snapshot.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use super::amount::decimal_string;
use super::currency::{Currency, Unit};

// ============================================================================
// Delegation
// ============================================================================

/// Activation state of a stake account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelegationStatus {
    /// Stake is earning rewards.
    #[default]
    Active,
    /// Stake warms up until the next epoch.
    Activating,
    /// Stake cools down until the next epoch.
    Deactivating,
    /// Stake is not delegated anymore.
    Inactive,
}

impl DelegationStatus {
    /// Returns the display string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Activating => "activating",
            Self::Deactivating => "deactivating",
            Self::Inactive => "inactive",
        }
    }
}

/// An account's stake allocated to one validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delegation {
    /// Address of the stake account holding this delegation.
    pub stake_account_address: String,
    /// Vote account the stake is delegated to.
    pub validator_address: String,
    /// Delegated amount in lamports.
    #[serde(with = "decimal_string")]
    pub amount: BigUint,
    /// Unclaimed rewards in lamports.
    #[serde(default, with = "decimal_string")]
    pub pending_rewards: BigUint,
    /// Activation state.
    #[serde(default)]
    pub status: DelegationStatus,
}

// ============================================================================
// Account
// ============================================================================

/// A wallet account on one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Wallet-local identifier.
    pub id: String,
    /// User-chosen account name.
    pub name: String,
    /// Receive address.
    pub fresh_address: String,
    /// Currency the account holds.
    pub currency: Currency,
    /// Balance in the base denomination.
    #[serde(with = "decimal_string")]
    pub balance: BigUint,
    /// Spendable balance in the base denomination.
    #[serde(default, with = "decimal_string")]
    pub spendable_balance: BigUint,
    /// Current stake delegations.
    #[serde(default)]
    pub delegations: Vec<Delegation>,
}

impl Account {
    /// The unit amounts of this account are displayed in.
    #[must_use]
    pub fn unit(&self) -> Unit {
        self.currency.default_unit()
    }
}

/// A token sub-account living under a parent account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAccount {
    /// Wallet-local identifier.
    pub id: String,
    /// Identifier of the parent account.
    pub parent_id: String,
    /// Token currency identifier.
    pub token_id: String,
    /// Token balance.
    #[serde(with = "decimal_string")]
    pub balance: BigUint,
}

/// Either a main account or a token account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AccountLike {
    /// A main account.
    Account(Account),
    /// A token account that needs its parent for currency data.
    TokenAccount(TokenAccount),
}

/// Resolve the main account behind an account-like value.
///
/// # Errors
///
/// Returns `StakeError::NotFound` when a token account has no parent or the
/// parent id does not match.
pub fn main_account<'a>(
    account: &'a AccountLike,
    parent: Option<&'a Account>,
) -> Result<&'a Account, super::StakeError> {
    match account {
        AccountLike::Account(a) => Ok(a),
        AccountLike::TokenAccount(token) => parent
            .filter(|p| p.id == token.parent_id)
            .ok_or_else(|| super::StakeError::not_found("parent account", &token.parent_id)),
    }
}

// ============================================================================
// Tests
// ============================================================================
