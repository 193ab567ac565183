//! Error types for staking domain operations.
//!
//! This module defines the custom error type used by the snapshot loader,
//! the confirmation context and the field registry.

use thiserror::Error;

use super::currency::Family;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for staking domain operations.
///
/// Missing validators and empty lists are never errors; they resolve to a
/// display fallback or to an empty result instead.
#[derive(Debug, Error)]
pub enum StakeError {
    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Entity not found in the loaded snapshot.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// The type of entity that was not found (e.g., "account", "validator").
        entity: &'static str,
        /// The identifier that was searched for.
        id: String,
    },

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A transaction of one family was handed to a view built for another.
    #[error("{expected} transaction expected, got {found}")]
    FamilyMismatch {
        /// The family the view was built for.
        expected: Family,
        /// The family of the transaction that was supplied.
        found: Family,
    },

    /// A confirmation field identifier with no registered renderer.
    #[error("Unknown confirmation field '{0}'")]
    UnknownField(String),
}

impl StakeError {
    /// Create a new parse error with the given message.
    ///
    /// # Arguments
    ///
    /// * `message` - Description of what failed to parse
    ///
    /// # Returns
    ///
    /// A new `StakeError::Parse` variant.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new not found error.
    ///
    /// # Arguments
    ///
    /// * `entity` - The type of entity that was not found
    /// * `id` - The identifier that was searched for
    ///
    /// # Returns
    ///
    /// A new `StakeError::NotFound` variant.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Convert to a `color_eyre::Report` for the application boundary.
    ///
    /// # Returns
    ///
    /// A `color_eyre::Report` containing the error message.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

impl From<serde_json::Error> for StakeError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stake_error_display() {
        let parse_err = StakeError::parse("test error");
        assert_eq!(format!("{}", parse_err), "Parse error: test error");

        let not_found_err = StakeError::not_found("account", "abc123");
        assert_eq!(format!("{}", not_found_err), "account 'abc123' not found");

        let invalid_err = StakeError::invalid_input("bad input");
        assert_eq!(format!("{}", invalid_err), "Invalid input: bad input");

        let mismatch = StakeError::FamilyMismatch {
            expected: Family::Solana,
            found: Family::Ethereum,
        };
        assert_eq!(
            format!("{}", mismatch),
            "solana transaction expected, got ethereum"
        );

        let unknown = StakeError::UnknownField("solana.fee".to_string());
        assert_eq!(
            format!("{}", unknown),
            "Unknown confirmation field 'solana.fee'"
        );
    }

    #[test]
    fn test_not_found_error_creation() {
        let err = StakeError::not_found("validator", "Vx1");
        match err {
            StakeError::NotFound { entity, id } => {
                assert_eq!(entity, "validator");
                assert_eq!(id, "Vx1");
            }
            _ => panic!("Expected NotFound variant"),
        }
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: StakeError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, StakeError::Parse { .. }));
    }
}
