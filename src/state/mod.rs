//! State management for the LazyStake TUI.
//!
//! - [`App`] - The snapshot being confirmed plus everything derived from it
//! - [`PopupState`] - Which overlay, if any, is shown
//! - [`AppConfig`] - Persistent configuration with load/save capabilities
//! - [`ClipboardManager`] - Copying addresses to the system clipboard
//!
//! All changes go through [`App::update`], one [`Action`] at a time. The
//! confirmation screen is rebuilt from the snapshot whenever the
//! transaction draft changes.

use color_eyre::{Result, eyre::eyre};

use crate::confirm::{ConfirmScreen, open_address_in_explorer};
use crate::delegation::{DelegationQuerySelector, EarnRewardsInfo, SelectorContext};
use crate::domain::{Snapshot, StakeError, Transaction};
use crate::event::Action;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod clipboard;
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use clipboard::ClipboardManager;
pub use config::AppConfig;

// ============================================================================
// Popup State
// ============================================================================

/// Overlay shown above the confirmation screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    None,
    /// A one-off message.
    Message(String),
    /// The staking starter content.
    EarnRewardsInfo(EarnRewardsInfo),
    /// The delegation selector; its state lives in [`App::selector`].
    Selector,
}

// ============================================================================
// Link
// ============================================================================

/// An address on the confirmation screen with its explorer page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub address: String,
    pub url: String,
}

// ============================================================================
// App
// ============================================================================

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Resident data; the transaction draft inside is the one being confirmed.
    pub snapshot: Snapshot,
    /// The confirmation screen, or why it cannot be shown.
    pub screen: Result<ConfirmScreen, StakeError>,
    /// Explorer links on the screen, in display order.
    pub links: Vec<Link>,
    /// Index into `links` of the focused link.
    pub focused_link: Option<usize>,
    /// The delegation selector while it is open.
    pub selector: Option<DelegationQuerySelector>,
    /// Current overlay.
    pub popup: PopupState,
    /// Persistent settings.
    pub config: AppConfig,
    /// Whether the main loop should stop.
    pub exit: bool,
    clipboard: ClipboardManager,
}

impl App {
    /// Creates the app for a loaded snapshot.
    #[must_use]
    pub fn new(snapshot: Snapshot, config: AppConfig) -> Self {
        let mut app = Self {
            snapshot,
            screen: Err(StakeError::invalid_input("screen not built")),
            links: Vec::new(),
            focused_link: None,
            selector: None,
            popup: PopupState::None,
            config,
            exit: false,
            clipboard: ClipboardManager::new(),
        };
        app.rebuild_screen();
        app
    }

    /// Rebuilds the confirmation screen and its links from the snapshot.
    pub fn rebuild_screen(&mut self) {
        self.screen = ConfirmScreen::from_snapshot(&self.snapshot);
        if let Err(err) = &self.screen {
            tracing::error!("Confirmation screen unavailable: {err}");
        }

        self.links = self
            .screen
            .as_ref()
            .map(|screen| {
                screen
                    .fields
                    .iter()
                    .flat_map(|field| field.links())
                    .map(|(address, url)| Link {
                        address: address.to_string(),
                        url: url.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        self.focused_link = match self.focused_link {
            Some(i) if i < self.links.len() => Some(i),
            _ if self.links.is_empty() => None,
            _ => Some(0),
        };
    }

    /// The focused link, if any.
    #[must_use]
    pub fn focused_link(&self) -> Option<&Link> {
        self.focused_link.and_then(|i| self.links.get(i))
    }

    /// Applies an action to the state.
    ///
    /// # Errors
    ///
    /// Returns an error when an outside effect fails (browser, clipboard) or
    /// the selector cannot be built for the snapshot.
    pub fn update(&mut self, action: Action) -> Result<()> {
        tracing::trace!(?action, "update");
        match action {
            Action::Quit => self.exit = true,
            Action::ShowMessage(message) => self.popup = PopupState::Message(message),
            Action::ClearPopup => self.close_popup(),

            Action::FocusNextLink => {
                if !self.links.is_empty() {
                    let next = self.focused_link.map_or(0, |i| (i + 1) % self.links.len());
                    self.focused_link = Some(next);
                }
            }
            Action::FocusPrevLink => {
                if !self.links.is_empty() {
                    let len = self.links.len();
                    let prev = self.focused_link.map_or(0, |i| (i + len - 1) % len);
                    self.focused_link = Some(prev);
                }
            }
            Action::OpenFocusedLink => self.open_focused_link()?,
            Action::CopyFocusedLink => self.copy_focused_link()?,
            Action::ShowEarnRewardsInfo => {
                self.popup = PopupState::EarnRewardsInfo(EarnRewardsInfo::solana());
            }
            Action::OpenLearnMore => {
                let url = EarnRewardsInfo::solana().learn_more_url;
                if self.config.open_links {
                    open::that(url)?;
                } else {
                    self.popup = PopupState::Message(url.to_string());
                }
            }

            Action::OpenSelector(context) => self.open_selector(context)?,
            Action::SelectorInput(c) => {
                if let Some(selector) = &mut self.selector {
                    selector.push_char(c);
                }
            }
            Action::SelectorBackspace => {
                if let Some(selector) = &mut self.selector {
                    selector.backspace();
                }
            }
            Action::SelectorClearQuery => {
                if let Some(selector) = &mut self.selector {
                    selector.set_query("");
                }
            }
            Action::SelectorNext => {
                if let Some(selector) = &mut self.selector {
                    selector.highlight_next();
                }
            }
            Action::SelectorPrev => {
                if let Some(selector) = &mut self.selector {
                    selector.highlight_prev();
                }
            }
            Action::SelectorConfirm => self.confirm_selection(),
            Action::SelectorCancel => self.close_popup(),
        }
        Ok(())
    }

    fn close_popup(&mut self) {
        if self.popup == PopupState::Selector {
            self.selector = None;
        }
        self.popup = PopupState::None;
    }

    fn open_focused_link(&mut self) -> Result<()> {
        let Some(link) = self.focused_link().cloned() else {
            return Ok(());
        };
        if !self.config.open_links {
            self.popup = PopupState::Message(link.url);
            return Ok(());
        }
        let account = self.snapshot.main_account()?;
        let preferred = self.config.explorer.as_deref();
        if !open_address_in_explorer(&account.currency, &link.address, preferred)? {
            self.popup = PopupState::Message(format!("No explorer for {}", link.address));
        }
        Ok(())
    }

    fn copy_focused_link(&mut self) -> Result<()> {
        let Some(link) = self.focused_link() else {
            return Ok(());
        };
        let address = link.address.clone();
        self.clipboard.copy_text(&address)?;
        self.popup = PopupState::Message(format!("Copied {address}"));
        Ok(())
    }

    fn open_selector(&mut self, context: SelectorContext) -> Result<()> {
        let account = self.snapshot.main_account()?;
        let transaction = self.snapshot.transaction.as_solana().ok_or_else(|| {
            eyre!(
                "The delegation selector needs a Solana transaction, got {}",
                self.snapshot.transaction.family()
            )
        })?;
        self.selector = Some(DelegationQuerySelector::new(
            account,
            transaction,
            &self.snapshot.validators,
            context,
        ));
        self.popup = PopupState::Selector;
        Ok(())
    }

    /// Writes the highlighted delegation's validator into the draft.
    fn confirm_selection(&mut self) {
        let Some(selector) = &self.selector else {
            return;
        };
        let mut chosen = None;
        if !selector.select_highlighted(|d| chosen = Some(d.validator_address.clone())) {
            return;
        }
        if let (Some(address), Transaction::Solana(tx)) = (chosen, &mut self.snapshot.transaction)
        {
            tracing::info!("Selected validator {address}");
            tx.set_validator_address(address);
        }
        self.close_popup();
        self.rebuild_screen();
    }
}

// ============================================================================
// Tests
// ============================================================================
