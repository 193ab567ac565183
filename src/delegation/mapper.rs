//! Mapping of raw delegation data to display-ready view models.
//!
//! Both mappers are pure: they join addresses with the validator catalog by
//! exact equality and format amounts with the account unit. Output order
//! always follows input order.

use num_bigint::BigUint;

use crate::domain::{
    Delegation, DelegationStatus, FormatOptions, Unit, Validator, ValidatorCatalog, ValidatorRef,
    format_currency_unit, validator_display_name,
};

// ============================================================================
// Mapped Validator Reference
// ============================================================================

/// A transaction validator reference joined with the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedValidatorRef {
    /// Vote account address, always present.
    pub address: String,
    /// Raw amount in the base denomination.
    pub amount: BigUint,
    /// Amount formatted with the unit code.
    pub formatted_amount: String,
    /// Catalog entry, absent when the address is unknown.
    pub validator: Option<Validator>,
}

impl MappedValidatorRef {
    /// Catalog name, or the address when unresolved.
    #[must_use]
    pub fn display_name(&self) -> &str {
        validator_display_name(self.validator.as_ref(), &self.address)
    }
}

/// Map validator references to display entries.
///
/// # Arguments
///
/// * `refs` - Validator references in transaction order
/// * `catalog` - Known validators
/// * `unit` - Unit used to format amounts
///
/// # Returns
///
/// One entry per reference, in the same order.
#[must_use]
pub fn map_delegation_info(
    refs: &[ValidatorRef],
    catalog: &ValidatorCatalog,
    unit: &Unit,
) -> Vec<MappedValidatorRef> {
    refs.iter()
        .map(|r| {
            let validator = catalog.find(&r.address).cloned();
            if validator.is_none() {
                tracing::debug!("Validator {} not in catalog", r.address);
            }
            MappedValidatorRef {
                address: r.address.clone(),
                amount: r.amount.clone(),
                formatted_amount: format_currency_unit(&r.amount, unit, FormatOptions::with_code()),
                validator,
            }
        })
        .collect()
}

// ============================================================================
// Mapped Delegation
// ============================================================================

/// An account delegation joined with the catalog, ready for a selector row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedDelegation {
    /// Vote account address, always present.
    pub validator_address: String,
    /// Catalog entry, absent when the address is unknown.
    pub validator: Option<Validator>,
    /// Stake account holding the delegation.
    pub stake_account_address: String,
    /// Delegated amount.
    pub amount: BigUint,
    /// Unclaimed rewards.
    pub pending_rewards: BigUint,
    /// Delegated amount with unit code.
    pub formatted_amount: String,
    /// Unclaimed rewards with unit code.
    pub formatted_pending_rewards: String,
    /// Activation state.
    pub status: DelegationStatus,
}

impl MappedDelegation {
    /// Catalog name, or the address when unresolved.
    #[must_use]
    pub fn display_name(&self) -> &str {
        validator_display_name(self.validator.as_ref(), &self.validator_address)
    }
}

/// Map account delegations to selector view models.
#[must_use]
pub fn map_delegations(
    delegations: &[Delegation],
    catalog: &ValidatorCatalog,
    unit: &Unit,
) -> Vec<MappedDelegation> {
    delegations
        .iter()
        .map(|d| MappedDelegation {
            validator_address: d.validator_address.clone(),
            validator: catalog.find(&d.validator_address).cloned(),
            stake_account_address: d.stake_account_address.clone(),
            amount: d.amount.clone(),
            pending_rewards: d.pending_rewards.clone(),
            formatted_amount: format_currency_unit(&d.amount, unit, FormatOptions::with_code()),
            formatted_pending_rewards: format_currency_unit(
                &d.pending_rewards,
                unit,
                FormatOptions::with_code(),
            ),
            status: d.status,
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
