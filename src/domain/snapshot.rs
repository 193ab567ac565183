//! Snapshot files.
//!
//! A snapshot is the resident data a confirmation or selection screen works
//! on: the account, the validator catalog as last preloaded, and the
//! transaction draft. It stands in for the wallet's reactive data sources.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::account::{Account, AccountLike, main_account};
use super::error::StakeError;
use super::transaction::Transaction;
use super::validator::ValidatorCatalog;

/// A field entry as written in a snapshot file, before its kind is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawField {
    /// Field kind identifier, e.g. `solana.memo`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Label shown next to the value.
    pub label: String,
}

/// Everything a screen needs, loaded from one JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// The account the transaction is drafted for.
    pub account: AccountLike,
    /// Parent account when `account` is a token account.
    #[serde(default)]
    pub parent_account: Option<Account>,
    /// Known validators.
    #[serde(default)]
    pub validators: ValidatorCatalog,
    /// The transaction draft.
    pub transaction: Transaction,
    /// Confirmation fields; derived from the transaction mode when absent.
    #[serde(default)]
    pub fields: Option<Vec<RawField>>,
}

impl Snapshot {
    /// Parses a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `StakeError::Parse` when the JSON does not describe a snapshot.
    pub fn from_json(json: &str) -> Result<Self, StakeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let content = fs::read_to_string(path)?;
        let snapshot = Self::from_json(&content).map_err(StakeError::into_report)?;
        tracing::debug!(
            "Loaded snapshot {} with {} validators",
            path.display(),
            snapshot.validators.len()
        );
        if snapshot.validators.is_empty() {
            tracing::warn!("Snapshot has no validator catalog; showing raw addresses");
        }
        Ok(snapshot)
    }

    /// The main account behind `account`.
    ///
    /// # Errors
    ///
    /// Returns `StakeError::NotFound` when a token account's parent is missing.
    pub fn main_account(&self) -> Result<&Account, StakeError> {
        main_account(&self.account, self.parent_account.as_ref())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::SAMPLE_SNAPSHOT;

    #[test]
    fn test_sample_snapshot_parses() {
        let snapshot = Snapshot::from_json(SAMPLE_SNAPSHOT).expect("sample should parse");
        let account = snapshot.main_account().unwrap();
        assert_eq!(account.delegations.len(), 3);
        assert_eq!(snapshot.validators.len(), 2);
        assert!(snapshot.transaction.as_solana().is_some());
        assert!(snapshot.fields.is_none());
    }

    #[test]
    fn test_invalid_snapshot_is_parse_error() {
        let err = Snapshot::from_json("{\"account\": 1}").unwrap_err();
        assert!(matches!(err, StakeError::Parse { .. }));
    }
}
