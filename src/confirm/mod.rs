//! Transaction confirmation for Solana staking.
//!
//! - [`context`] - Validated per-render inputs
//! - [`fields`] - Field registry and renderers
//! - [`resolvers`] - Title, warning and fee policy
//! - [`explorer`] - Explorer links for displayed addresses
//!
//! [`ConfirmScreen`] assembles all of them for one transaction.

pub mod context;
pub mod explorer;
pub mod fields;
pub mod resolvers;

pub use context::ConfirmContext;
pub use explorer::open_address_in_explorer;
pub use fields::{
    ConfirmField, FieldDescriptor, FieldKind, default_fields, field_components, parse_fields,
    render_fields,
};
pub use resolvers::{TitleKey, Warning, disable_fees, title, warning};

use crate::domain::{Snapshot, StakeError, TransactionMode};
use crate::i18n::t;

// ============================================================================
// Family Confirmation Hooks
// ============================================================================

/// What a family plugs into the generic confirmation screen.
#[derive(Debug, Clone, Copy)]
pub struct FamilyConfirm {
    /// Field kinds this family renders.
    pub field_components: fn() -> &'static [FieldKind],
    /// Warning banner for a mode.
    pub warning: fn(&TransactionMode, &str) -> Option<Warning>,
    /// Title for a mode.
    pub title: fn(&TransactionMode) -> TitleKey,
    /// Whether the fee control is hidden.
    pub disable_fees: fn() -> bool,
}

/// Solana confirmation hooks.
pub const SOLANA: FamilyConfirm = FamilyConfirm {
    field_components,
    warning,
    title,
    disable_fees,
};

// ============================================================================
// Confirm Screen
// ============================================================================

/// Everything the confirmation screen shows for one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmScreen {
    /// Localized title.
    pub title: String,
    /// Optional banner.
    pub warning: Option<Warning>,
    /// Fields with something to show, in descriptor order.
    pub fields: Vec<ConfirmField>,
    /// Whether the fee control is shown.
    pub show_fees: bool,
}

impl ConfirmScreen {
    /// Builds the screen for a snapshot.
    ///
    /// Fields listed in the snapshot are used as given (unknown kinds are
    /// skipped); otherwise the mode's default fields are shown.
    ///
    /// # Errors
    ///
    /// Returns the context errors of [`ConfirmContext::new`].
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, StakeError> {
        let ctx = ConfirmContext::from_snapshot(snapshot)?;
        let descriptors = match &snapshot.fields {
            Some(raw) => parse_fields(raw),
            None => default_fields(&ctx.transaction().mode),
        };
        Ok(Self::build(&ctx, &descriptors, &SOLANA))
    }

    /// Builds the screen from a context and descriptors.
    #[must_use]
    pub fn build(
        ctx: &ConfirmContext<'_>,
        descriptors: &[FieldDescriptor],
        family: &FamilyConfirm,
    ) -> Self {
        let mode = &ctx.transaction().mode;
        let registered = (family.field_components)();
        let descriptors: Vec<FieldDescriptor> = descriptors
            .iter()
            .filter(|d| registered.contains(&d.kind))
            .cloned()
            .collect();

        Self {
            title: (family.title)(mode).resolve(),
            warning: (family.warning)(mode, &t("TransactionConfirm.recipientWording.send")),
            fields: render_fields(ctx, &descriptors),
            show_fees: !(family.disable_fees)(),
        }
    }

    /// Unstyled text of the screen: title, warning and every field.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut sections = vec![self.title.clone()];
        if let Some(warning) = &self.warning {
            sections.push(format!("⚠ {}", warning.message));
        }
        sections.extend(self.fields.iter().map(ConfirmField::plain_text));
        sections.join("\n")
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
    fn test_sample_screen() {
        let snapshot = Snapshot::from_json(SAMPLE_SNAPSHOT).unwrap();
        let screen = ConfirmScreen::from_snapshot(&snapshot).unwrap();

        assert!(screen.warning.is_none());
        assert!(!screen.show_fees);
        assert!(screen.title.contains("delegation"));
        let kinds: Vec<FieldKind> = screen.fields.iter().map(ConfirmField::kind).collect();
        assert_eq!(
            kinds,
            vec![FieldKind::ValidatorName, FieldKind::ValidatorAmount, FieldKind::Memo]
        );
    }

    #[test]
    fn test_send_screen_warns() {
        let mut snapshot = Snapshot::from_json(SAMPLE_SNAPSHOT).unwrap();
        if let crate::domain::Transaction::Solana(tx) = &mut snapshot.transaction {
            tx.mode = TransactionMode::Send;
        }
        let screen = ConfirmScreen::from_snapshot(&snapshot).unwrap();
        let warning = screen.warning.as_ref().expect("send shows a warning");
        assert!(warning.message.contains("recipient address"));
        // Validators are hidden outside staking modes, only the memo remains.
        assert_eq!(screen.fields.len(), 1);

        let text = screen.plain_text();
        assert!(text.lines().nth(1).is_some_and(|l| l.starts_with("⚠ ")));
    }

    #[test]
    fn test_plain_text_lists_fields_in_order() {
        let snapshot = Snapshot::from_json(SAMPLE_SNAPSHOT).unwrap();
        let screen = ConfirmScreen::from_snapshot(&snapshot).unwrap();
        let text = screen.plain_text();

        assert_eq!(text.lines().next(), Some(screen.title.as_str()));
        let validator = text.find("Acme Validator").unwrap();
        let amount = text.find("1.5 SOL").unwrap();
        let memo = text.find("first stake").unwrap();
        assert!(validator < amount && amount < memo);
        assert!(!text.contains('⚠'));
    }
}
