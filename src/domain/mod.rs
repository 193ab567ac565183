//! Domain types for the LazyStake confirmation screens.
//!
//! # Module Organization
//!
//! - [`error`] - Custom error types
//! - [`currency`] - Families, currencies, units and explorer views
//! - [`amount`] - Arbitrary-precision amount formatting
//! - [`account`] - Accounts and stake delegations
//! - [`validator`] - Validator catalog
//! - [`transaction`] - Transaction drafts and modes
//! - [`snapshot`] - Snapshot files tying the above together

// ============================================================================
// Module Declarations
// ============================================================================

pub mod account;
pub mod amount;
pub mod currency;
pub mod error;
pub mod snapshot;
pub mod transaction;
pub mod validator;

// ============================================================================
// Re-exports
// ============================================================================

pub use account::{Account, AccountLike, Delegation, DelegationStatus, main_account};
pub use amount::{FormatOptions, format_currency_unit};
pub use currency::{Currency, ExplorerView, Family, Unit};
pub use error::StakeError;
pub use snapshot::{RawField, Snapshot};
pub use transaction::{SolanaTransaction, Transaction, TransactionMode, ValidatorRef};
pub use validator::{Validator, ValidatorCatalog, validator_display_name};
