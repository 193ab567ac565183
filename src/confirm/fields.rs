//! Confirmation field registry and renderers.
//!
//! Each [`FieldKind`] has one renderer. Rendering a field yields a typed
//! [`ConfirmField`] payload, or `None` when the transaction has nothing to
//! show for that kind; the screen then simply skips it.

use std::str::FromStr;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::domain::{RawField, StakeError, TransactionMode};
use crate::i18n::{t, t_with};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, TEXT_COLOR};

use super::context::ConfirmContext;

/// Width of the label column in rendered lines.
pub const LABEL_WIDTH: usize = 18;

// ============================================================================
// Field Kind
// ============================================================================

/// The confirmation fields a Solana transaction can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// The transaction memo.
    Memo,
    /// Every targeted validator with its amount.
    DelegateValidators,
    /// Name and address of the first targeted validator.
    ValidatorName,
    /// Amount sent to the first targeted validator.
    ValidatorAmount,
    /// Name and address of the redelegation source.
    SourceValidatorName,
}

impl FieldKind {
    /// Every registered kind.
    pub const ALL: [Self; 5] = [
        Self::Memo,
        Self::DelegateValidators,
        Self::ValidatorName,
        Self::ValidatorAmount,
        Self::SourceValidatorName,
    ];

    /// External identifier of the kind.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Memo => "solana.memo",
            Self::DelegateValidators => "solana.delegateValidators",
            Self::ValidatorName => "solana.validatorName",
            Self::ValidatorAmount => "solana.validatorAmount",
            Self::SourceValidatorName => "solana.sourceValidatorName",
        }
    }

    /// Localization key of the label used when none is supplied.
    #[must_use]
    pub const fn default_label_key(&self) -> &'static str {
        match self {
            Self::Memo => "solana.fields.memo",
            Self::DelegateValidators => "solana.fields.delegateValidators",
            Self::ValidatorName => "solana.fields.validatorName",
            Self::ValidatorAmount => "solana.fields.validatorAmount",
            Self::SourceValidatorName => "solana.fields.sourceValidatorName",
        }
    }
}

impl FromStr for FieldKind {
    type Err = StakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| StakeError::UnknownField(s.to_string()))
    }
}

/// The field registry: every kind with a renderer.
#[must_use]
pub const fn field_components() -> &'static [FieldKind] {
    &FieldKind::ALL
}

// ============================================================================
// Field Descriptor
// ============================================================================

/// Which field to render and the label to show with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub kind: FieldKind,
    pub label: String,
}

impl FieldDescriptor {
    #[must_use]
    pub fn new(kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }

    /// Descriptor with the kind's default localized label.
    #[must_use]
    pub fn with_default_label(kind: FieldKind) -> Self {
        Self::new(kind, t(kind.default_label_key()))
    }
}

impl TryFrom<&RawField> for FieldDescriptor {
    type Error = StakeError;

    fn try_from(raw: &RawField) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.kind.parse()?, raw.label.clone()))
    }
}

/// The fields a mode shows when the caller does not list them.
#[must_use]
pub fn default_fields(mode: &TransactionMode) -> Vec<FieldDescriptor> {
    use FieldKind::*;

    let kinds: &[FieldKind] = match mode {
        TransactionMode::Send | TransactionMode::Other(_) => &[Memo],
        TransactionMode::Delegate => &[ValidatorName, ValidatorAmount, Memo],
        TransactionMode::Undelegate => &[ValidatorName, ValidatorAmount],
        TransactionMode::Redelegate => &[SourceValidatorName, ValidatorName, ValidatorAmount],
        TransactionMode::ClaimReward | TransactionMode::ClaimRewardCompound => {
            &[DelegateValidators]
        }
    };
    kinds
        .iter()
        .copied()
        .map(FieldDescriptor::with_default_label)
        .collect()
}

/// Parses raw field entries, dropping unknown kinds with a warning.
#[must_use]
pub fn parse_fields(raw: &[RawField]) -> Vec<FieldDescriptor> {
    raw.iter()
        .filter_map(|entry| match FieldDescriptor::try_from(entry) {
            Ok(descriptor) => Some(descriptor),
            Err(err) => {
                tracing::warn!("Skipping confirmation field: {err}");
                None
            }
        })
        .collect()
}

// ============================================================================
// Rendered Fields
// ============================================================================

/// One validator row of the delegate-validators field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorRow {
    /// Catalog name, else the address.
    pub name: String,
    /// Vote account address.
    pub address: String,
    /// Amount with unit code.
    pub formatted_amount: String,
    /// Explorer page of the address.
    pub explorer_url: Option<String>,
}

/// A rendered confirmation field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmField {
    Memo {
        label: String,
        memo: String,
    },
    DelegateValidators {
        label: String,
        rows: Vec<ValidatorRow>,
    },
    ValidatorName {
        label: String,
        /// Catalog name; blank when the address is not in the catalog.
        name: Option<String>,
        address: String,
        explorer_url: Option<String>,
    },
    ValidatorAmount {
        label: String,
        formatted_amount: String,
    },
    SourceValidatorName {
        label: String,
        name: String,
        address: String,
        explorer_url: Option<String>,
    },
}

/// Render one field.
///
/// # Returns
///
/// `None` when the field's precondition does not hold.
#[must_use]
pub fn render_field(ctx: &ConfirmContext<'_>, descriptor: &FieldDescriptor) -> Option<ConfirmField> {
    let label = descriptor.label.clone();
    let tx = ctx.transaction();

    match descriptor.kind {
        FieldKind::Memo => tx.memo().map(|memo| ConfirmField::Memo {
            label,
            memo: memo.to_string(),
        }),
        FieldKind::DelegateValidators => {
            let rows: Vec<ValidatorRow> = ctx
                .mapped_validators()
                .into_iter()
                .map(|m| ValidatorRow {
                    name: m.display_name().to_string(),
                    explorer_url: ctx.explorer_url(&m.address),
                    address: m.address,
                    formatted_amount: m.formatted_amount,
                })
                .collect();
            (!rows.is_empty()).then_some(ConfirmField::DelegateValidators { label, rows })
        }
        FieldKind::ValidatorName => {
            let first = tx.validators().first()?;
            let name = ctx
                .find_validator(&first.address)
                .and_then(|v| v.display_name())
                .map(str::to_string);
            Some(ConfirmField::ValidatorName {
                label,
                name,
                explorer_url: ctx.explorer_url(&first.address),
                address: first.address.clone(),
            })
        }
        FieldKind::ValidatorAmount => {
            let first = ctx.mapped_validators().into_iter().next()?;
            Some(ConfirmField::ValidatorAmount {
                label,
                formatted_amount: first.formatted_amount,
            })
        }
        FieldKind::SourceValidatorName => {
            let validator = ctx.find_validator(tx.source_validator()?)?;
            let address = validator.validator_address.clone();
            Some(ConfirmField::SourceValidatorName {
                label,
                name: validator.display_name().unwrap_or(&address).to_string(),
                explorer_url: ctx.explorer_url(&address),
                address,
            })
        }
    }
}

/// Render every descriptor, keeping only the fields that have something to show.
#[must_use]
pub fn render_fields(ctx: &ConfirmContext<'_>, descriptors: &[FieldDescriptor]) -> Vec<ConfirmField> {
    descriptors
        .iter()
        .filter_map(|d| render_field(ctx, d))
        .collect()
}

// ============================================================================
// Line Rendering
// ============================================================================

fn label_span(label: &str) -> Span<'static> {
    Span::styled(
        format!("{label:<LABEL_WIDTH$}"),
        Style::default()
            .fg(MUTED_COLOR)
            .add_modifier(Modifier::BOLD),
    )
}

fn indent_span() -> Span<'static> {
    Span::raw(" ".repeat(LABEL_WIDTH))
}

fn value_span(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(TEXT_COLOR))
}

fn link_span(address: &str) -> Span<'static> {
    Span::styled(
        address.to_string(),
        Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::UNDERLINED),
    )
}

impl ConfirmField {
    /// The kind this field was rendered for.
    #[cfg(test)]
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Memo { .. } => FieldKind::Memo,
            Self::DelegateValidators { .. } => FieldKind::DelegateValidators,
            Self::ValidatorName { .. } => FieldKind::ValidatorName,
            Self::ValidatorAmount { .. } => FieldKind::ValidatorAmount,
            Self::SourceValidatorName { .. } => FieldKind::SourceValidatorName,
        }
    }

    /// Addresses shown as explorer links, with their URLs.
    #[must_use]
    pub fn links(&self) -> Vec<(&str, &str)> {
        match self {
            Self::DelegateValidators { rows, .. } => rows
                .iter()
                .filter_map(|r| r.explorer_url.as_deref().map(|u| (r.address.as_str(), u)))
                .collect(),
            Self::ValidatorName {
                address,
                explorer_url: Some(url),
                ..
            }
            | Self::SourceValidatorName {
                address,
                explorer_url: Some(url),
                ..
            } => vec![(address.as_str(), url.as_str())],
            _ => Vec::new(),
        }
    }

    /// Styled terminal lines for this field.
    #[must_use]
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        match self {
            Self::Memo { label, memo } => {
                vec![Line::from(vec![label_span(label), value_span(memo.clone())])]
            }
            Self::DelegateValidators { label, rows } => {
                let mut lines = vec![Line::from(label_span(label))];
                for row in rows {
                    let votes = t_with(
                        "operationDetails.extra.votesAddress",
                        &[("votes", &row.formatted_amount), ("name", &row.name)],
                    );
                    lines.push(Line::from(vec![Span::raw("  "), value_span(votes)]));
                    lines.push(Line::from(vec![Span::raw("    "), link_span(&row.address)]));
                }
                lines
            }
            Self::ValidatorName {
                label,
                name,
                address,
                ..
            } => vec![
                Line::from(vec![
                    label_span(label),
                    value_span(name.clone().unwrap_or_default()),
                ]),
                Line::from(vec![indent_span(), link_span(address)]),
            ],
            Self::ValidatorAmount {
                label,
                formatted_amount,
            } => vec![Line::from(vec![
                label_span(label),
                value_span(formatted_amount.clone()),
            ])],
            Self::SourceValidatorName {
                label,
                name,
                address,
                ..
            } => vec![
                Line::from(vec![label_span(label), value_span(name.clone())]),
                Line::from(vec![indent_span(), link_span(address)]),
            ],
        }
    }

    /// Unstyled text of [`ConfirmField::to_lines`], one line per row.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.to_lines()
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ============================================================================
// Tests
// ============================================================================
