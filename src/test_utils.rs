//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting account, delegation and catalog
//! setup across tests.
#![allow(dead_code)]

use num_bigint::BigUint;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;

use crate::domain::{
    Account, Currency, Delegation, DelegationStatus, Snapshot, Validator, ValidatorCatalog,
};
use crate::state::{App, AppConfig};

/// Snapshot shipped in `demos/`: a 1.5 SOL delegation to "Acme Validator".
pub const SAMPLE_SNAPSHOT: &str = include_str!("../demos/delegate.json");

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct AccountMother;

impl AccountMother {
    #[must_use]
    pub fn solana(delegations: Vec<Delegation>) -> Account {
        Account {
            id: "js:2:solana:main".to_string(),
            name: "Solana 1".to_string(),
            fresh_address: "7vYVzC5q1fQd8PJkYV4r1J2ocJvt6mHfB4W2rU4sQJ2p".to_string(),
            currency: Currency::solana(),
            balance: BigUint::from(12_500_000_000u64),
            spendable_balance: BigUint::from(3_000_000_000u64),
            delegations,
        }
    }
}

pub struct DelegationMother;

impl DelegationMother {
    /// Active delegation held by stake account `stake-<validator>`.
    #[must_use]
    pub fn with_rewards(validator: &str, amount: u64, pending_rewards: u64) -> Delegation {
        Delegation {
            stake_account_address: format!("stake-{validator}"),
            validator_address: validator.to_string(),
            amount: BigUint::from(amount),
            pending_rewards: BigUint::from(pending_rewards),
            status: DelegationStatus::Active,
        }
    }
}

// ============================================================================
// rstest Fixtures
// ============================================================================

/// Catalog with "Acme Validator" (Vx1) and "Borealis Stake" (Vx2).
#[fixture]
pub fn acme_catalog() -> ValidatorCatalog {
    ValidatorCatalog::new(vec![
        Validator::new("Vx1", Some("Acme Validator")),
        Validator::new("Vx2", Some("Borealis Stake")),
    ])
}

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 40)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

/// App over [`SAMPLE_SNAPSHOT`] with browser opening turned off.
#[fixture]
pub fn sample_app() -> App {
    let snapshot = Snapshot::from_json(SAMPLE_SNAPSHOT).expect("sample snapshot parses");
    let config = AppConfig {
        open_links: false,
        ..AppConfig::default()
    };
    App::new(snapshot, config)
}

// ============================================================================
// Buffer Helpers
// ============================================================================

/// Text content of a rendered buffer, one line per row, trailing spaces trimmed.
#[must_use]
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area();
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
