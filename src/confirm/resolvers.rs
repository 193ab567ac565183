//! Title and warning selection for the confirmation screen.

use crate::domain::TransactionMode;
use crate::i18n::{t, t_with};

// ============================================================================
// Warning
// ============================================================================

/// A banner shown above the confirmation fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Localized banner text.
    pub message: String,
}

/// Warning banner for a transaction mode.
///
/// Staking modes have their own device screens and get no banner. Every
/// other mode, unknown ones included, gets the generic "verify the
/// recipient" warning.
#[must_use]
pub fn warning(mode: &TransactionMode, recipient_wording: &str) -> Option<Warning> {
    if mode.is_staking() {
        return None;
    }
    Some(Warning {
        message: t_with(
            "TransactionConfirm.warning",
            &[("recipientWording", recipient_wording)],
        ),
    })
}

// ============================================================================
// Title
// ============================================================================

/// Localization key of a confirmation title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleKey(String);

impl TitleKey {
    /// The raw key.
    #[cfg(test)]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.0
    }

    /// The localized title; unknown keys resolve to themselves.
    #[must_use]
    pub fn resolve(&self) -> String {
        t(&self.0)
    }
}

/// Title key for a mode, looked up by the exact mode string.
#[must_use]
pub fn title(mode: &TransactionMode) -> TitleKey {
    TitleKey(format!("TransactionConfirm.titleWording.{}", mode.as_str()))
}

// ============================================================================
// Fees
// ============================================================================

/// Solana confirmations never show a fee adjustment control.
#[must_use]
pub const fn disable_fees() -> bool {
    true
}

// ============================================================================
// Tests
// ============================================================================
