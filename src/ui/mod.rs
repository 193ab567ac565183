//! UI rendering module for the LazyStake TUI.
//!
//! # Module Structure
//!
//! - `confirm` - The confirmation screen body
//! - `popups` - Modal dialogs (messages, starter info, delegation selector)
//! - `layout` - Layout calculations
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod confirm;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod popups;

use ratatui::{Frame, layout::Rect};

use crate::state::{App, PopupState};

use layout::calculate_app_layout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// # Arguments
///
/// * `app` - The application state containing all data to render
/// * `frame` - The ratatui frame to render to
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = calculate_app_layout(size);

    header::render(frame, layout.header, app);
    confirm::render(frame, layout.main, app);
    footer::render(frame, layout.footer, app);

    render_popups(app, frame, size);
}

/// Render popup overlays based on current popup state
fn render_popups(app: &App, frame: &mut Frame, area: Rect) {
    match &app.popup {
        PopupState::Message(message) => popups::message::render(frame, area, message),
        PopupState::EarnRewardsInfo(info) => popups::earn_info::render(frame, area, info),
        PopupState::Selector => {
            if let Some(selector) = &app.selector {
                popups::selector::render(frame, area, selector);
            }
        }
        PopupState::None => {}
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delegation::SelectorContext;
    use crate::event::Action;
    use crate::test_utils::{buffer_text, sample_app, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::*;

    #[rstest]
    fn test_full_screen(mut test_terminal: Terminal<TestBackend>) {
        let app = sample_app();
        test_terminal.draw(|frame| render(&app, frame)).unwrap();

        let text = buffer_text(test_terminal.backend().buffer());
        assert!(text.contains("[lazystake]"));
        assert!(text.contains("Acme Validator"));
        assert!(text.contains("q:Quit"));
    }

    #[rstest]
    fn test_selector_overlay(mut test_terminal: Terminal<TestBackend>) {
        let mut app = sample_app();
        app.update(Action::OpenSelector(SelectorContext::General))
            .unwrap();
        test_terminal.draw(|frame| render(&app, frame)).unwrap();

        let text = buffer_text(test_terminal.backend().buffer());
        assert!(text.contains("Borealis Stake"));
        assert!(text.contains("Esc:Cancel"));
    }
}
