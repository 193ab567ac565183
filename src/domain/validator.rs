//! Validator catalog types.
//!
//! The catalog is an immutable snapshot of known validators. It is refreshed
//! outside this crate and only read here.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

// ============================================================================
// Validator
// ============================================================================

/// A vote account that stake can be delegated to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validator {
    /// Vote account address.
    pub validator_address: String,
    /// Display name published by the operator, if any.
    #[serde(default)]
    pub name: Option<String>,
    /// Commission in percent.
    #[serde(default)]
    pub commission: Option<u8>,
    /// Total active stake in lamports.
    #[serde(default, with = "super::amount::opt_decimal_string")]
    pub active_stake: Option<BigUint>,
    /// Operator website.
    #[serde(default)]
    pub www_url: Option<String>,
}

impl Validator {
    /// Creates a validator with only an address and optional name.
    #[cfg(test)]
    #[must_use]
    pub fn new(address: impl Into<String>, name: Option<&str>) -> Self {
        Self {
            validator_address: address.into(),
            name: name.map(str::to_string),
            commission: None,
            active_stake: None,
            www_url: None,
        }
    }

    /// Returns the published name when it is present and non-empty.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// Name shown for a validator address.
///
/// Uses the catalog name when it exists and is non-empty, otherwise the
/// raw address. Every place that shows a validator goes through here.
#[must_use]
pub fn validator_display_name<'a>(validator: Option<&'a Validator>, address: &'a str) -> &'a str {
    validator.and_then(Validator::display_name).unwrap_or(address)
}

// ============================================================================
// Catalog
// ============================================================================

/// Ordered snapshot of known validators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidatorCatalog(Vec<Validator>);

impl ValidatorCatalog {
    /// Wraps a validator list.
    #[cfg(test)]
    #[must_use]
    pub fn new(validators: Vec<Validator>) -> Self {
        Self(validators)
    }

    /// Finds a validator by exact address equality.
    #[must_use]
    pub fn find(&self, address: &str) -> Option<&Validator> {
        self.0.iter().find(|v| v.validator_address == address)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallback() {
        let named = Validator::new("Vx1", Some("Acme Validator"));
        let unnamed = Validator::new("Vx2", None);
        let blank = Validator::new("Vx3", Some("  "));

        let cases = [
            (Some(&named), "Vx1", "Acme Validator"),
            (Some(&unnamed), "Vx2", "Vx2"),
            (Some(&blank), "Vx3", "Vx3"),
            (None, "Vx4", "Vx4"),
        ];

        for (validator, address, expected) in cases {
            assert_eq!(validator_display_name(validator, address), expected);
        }
    }

    #[test]
    fn test_catalog_find_exact() {
        let catalog = ValidatorCatalog::new(vec![
            Validator::new("Vx1", Some("One")),
            Validator::new("Vx10", Some("Ten")),
        ]);
        assert_eq!(catalog.find("Vx1").and_then(|v| v.name.as_deref()), Some("One"));
        assert!(catalog.find("vx1").is_none());
        assert!(catalog.find("Vx").is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_catalog_deserialization() {
        let json = r#"[
            {"validatorAddress": "Vx1", "name": "Acme", "commission": 7, "activeStake": "1000"},
            {"validatorAddress": "Vx2"}
        ]"#;
        let catalog: ValidatorCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        let acme = catalog.find("Vx1").unwrap();
        assert_eq!(acme.commission, Some(7));
        assert_eq!(acme.active_stake, Some(BigUint::from(1000u32)));
        assert!(catalog.find("Vx2").unwrap().name.is_none());
    }
}
