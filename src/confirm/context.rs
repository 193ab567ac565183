//! Per-render confirmation context.
//!
//! The context is built once for a confirmation screen. Building it checks
//! that the transaction belongs to the Solana family and resolves the main
//! account and its unit, so field renderers work on validated, narrowed data.

use crate::delegation::{MappedValidatorRef, map_delegation_info};
use crate::domain::{
    Account, AccountLike, Family, Snapshot, SolanaTransaction, StakeError, Transaction, Unit,
    Validator, ValidatorCatalog, main_account,
};

use super::explorer::address_url;

/// Validated inputs shared by every field of one confirmation screen.
#[derive(Debug, Clone)]
pub struct ConfirmContext<'a> {
    account: &'a Account,
    unit: Unit,
    transaction: &'a SolanaTransaction,
    catalog: &'a ValidatorCatalog,
}

impl<'a> ConfirmContext<'a> {
    /// Builds a context.
    ///
    /// # Errors
    ///
    /// - `StakeError::FamilyMismatch` if the transaction, or the account it is
    ///   drafted for, is not a Solana one.
    /// - `StakeError::NotFound` if a token account's parent is missing.
    pub fn new(
        account: &'a AccountLike,
        parent: Option<&'a Account>,
        transaction: &'a Transaction,
        catalog: &'a ValidatorCatalog,
    ) -> Result<Self, StakeError> {
        let Transaction::Solana(transaction) = transaction else {
            return Err(StakeError::FamilyMismatch {
                expected: Family::Solana,
                found: transaction.family(),
            });
        };

        let account = main_account(account, parent)?;
        if account.currency.family != Family::Solana {
            return Err(StakeError::FamilyMismatch {
                expected: Family::Solana,
                found: account.currency.family,
            });
        }

        Ok(Self {
            account,
            unit: account.unit(),
            transaction,
            catalog,
        })
    }

    /// Builds a context from a loaded snapshot.
    ///
    /// # Errors
    ///
    /// See [`ConfirmContext::new`].
    pub fn from_snapshot(snapshot: &'a Snapshot) -> Result<Self, StakeError> {
        Self::new(
            &snapshot.account,
            snapshot.parent_account.as_ref(),
            &snapshot.transaction,
            &snapshot.validators,
        )
    }

    #[must_use]
    pub const fn account(&self) -> &Account {
        self.account
    }

    #[must_use]
    pub const fn unit(&self) -> &Unit {
        &self.unit
    }

    #[must_use]
    pub const fn transaction(&self) -> &SolanaTransaction {
        self.transaction
    }

    #[must_use]
    pub const fn catalog(&self) -> &ValidatorCatalog {
        self.catalog
    }

    /// Catalog entry for `address`.
    #[must_use]
    pub fn find_validator(&self, address: &str) -> Option<&'a Validator> {
        self.catalog.find(address)
    }

    /// The transaction's validators joined with the catalog.
    #[must_use]
    pub fn mapped_validators(&self) -> Vec<MappedValidatorRef> {
        map_delegation_info(self.transaction.validators(), self.catalog, &self.unit)
    }

    /// Explorer URL for an address on the account's currency.
    #[must_use]
    pub fn explorer_url(&self, address: &str) -> Option<String> {
        address_url(&self.account.currency, address)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::GenericTransaction;
    use crate::domain::{Currency, TransactionMode};
    use crate::test_utils::{AccountMother, acme_catalog};
    use num_bigint::BigUint;
    use rstest::*;

    #[rstest]
    fn test_rejects_other_family(acme_catalog: ValidatorCatalog) {
        let account = AccountLike::Account(AccountMother::solana(Vec::new()));
        let tx = Transaction::Other(GenericTransaction {
            family: Family::Ethereum,
            recipient: "0xabc".to_string(),
            amount: BigUint::from(1u8),
        });

        let err = ConfirmContext::new(&account, None, &tx, &acme_catalog).unwrap_err();
        assert!(matches!(
            err,
            StakeError::FamilyMismatch {
                expected: Family::Solana,
                found: Family::Ethereum
            }
        ));
    }

    #[rstest]
    fn test_rejects_non_solana_account(acme_catalog: ValidatorCatalog) {
        let mut inner = AccountMother::solana(Vec::new());
        inner.currency = Currency {
            family: Family::Cosmos,
            ..Currency::solana()
        };
        let account = AccountLike::Account(inner);
        let tx = Transaction::Solana(SolanaTransaction::new(TransactionMode::Delegate));

        assert!(matches!(
            ConfirmContext::new(&account, None, &tx, &acme_catalog),
            Err(StakeError::FamilyMismatch {
                found: Family::Cosmos,
                ..
            })
        ));
    }

    #[rstest]
    fn test_builds_for_solana(acme_catalog: ValidatorCatalog) {
        let account = AccountLike::Account(AccountMother::solana(Vec::new()));
        let tx = Transaction::Solana(SolanaTransaction::new(TransactionMode::Delegate));
        let ctx = ConfirmContext::new(&account, None, &tx, &acme_catalog).unwrap();

        assert_eq!(ctx.unit().code, "SOL");
        assert_eq!(ctx.transaction().mode, TransactionMode::Delegate);
        assert!(ctx.find_validator("Vx1").is_some());
        assert!(ctx.mapped_validators().is_empty());
        assert_eq!(
            ctx.explorer_url("Vx1").as_deref(),
            Some("https://explorer.solana.com/address/Vx1")
        );
    }
}
