//! Delegation view models and the delegation selector.
//!
//! - [`mapper`] - Joins delegations and validator references with the catalog
//! - [`selector`] - Searchable selector state for undelegation and claim flows
//! - [`info`] - Staking starter screen content

pub mod info;
pub mod mapper;
pub mod selector;

pub use info::EarnRewardsInfo;
pub use mapper::{MappedDelegation, MappedValidatorRef, map_delegation_info};
pub use selector::{DelegationQuerySelector, SelectorContext};
