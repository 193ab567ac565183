//! Keyboard input mapping.
//!
//! Turns crossterm events into [`Action`]s based on which overlay is shown.
//! The handler only reads the state; [`App::update`](crate::state::App::update)
//! applies the result.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::delegation::SelectorContext;
use crate::event::Action;
use crate::state::{App, PopupState};

/// Handles a crossterm event and returns an optional Action.
#[must_use]
pub fn handle_event(app: &App, event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_press(app, *key),
        _ => None,
    }
}

fn handle_key_press(app: &App, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match &app.popup {
        PopupState::None => handle_main_keys(key),
        PopupState::Selector => handle_selector_keys(key),
        PopupState::EarnRewardsInfo(_) => handle_info_keys(key),
        PopupState::Message(_) => handle_message_keys(key),
    }
}

fn handle_main_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => Some(Action::FocusNextLink),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => Some(Action::FocusPrevLink),
        KeyCode::Enter | KeyCode::Char('o') => Some(Action::OpenFocusedLink),
        KeyCode::Char('c') => Some(Action::CopyFocusedLink),
        KeyCode::Char('i') => Some(Action::ShowEarnRewardsInfo),
        KeyCode::Char('s') => Some(Action::OpenSelector(SelectorContext::General)),
        KeyCode::Char('r') => Some(Action::OpenSelector(SelectorContext::ClaimRewards)),
        _ => None,
    }
}

/// Every printable key goes to the query while the selector is open.
fn handle_selector_keys(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('u') {
        return Some(Action::SelectorClearQuery);
    }
    match key.code {
        KeyCode::Esc => Some(Action::SelectorCancel),
        KeyCode::Enter => Some(Action::SelectorConfirm),
        KeyCode::Down | KeyCode::Tab => Some(Action::SelectorNext),
        KeyCode::Up | KeyCode::BackTab => Some(Action::SelectorPrev),
        KeyCode::Backspace => Some(Action::SelectorBackspace),
        KeyCode::Char(c) => Some(Action::SelectorInput(c)),
        _ => None,
    }
}

fn handle_info_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('l') | KeyCode::Enter => Some(Action::OpenLearnMore),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::ClearPopup),
        _ => None,
    }
}

fn handle_message_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::ClearPopup),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
