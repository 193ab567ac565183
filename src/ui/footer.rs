//! Footer bar with the keyboard shortcuts of the current view.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::state::{App, PopupState};
use crate::theme::MUTED_COLOR;

/// Shortcut hints for the current popup state.
#[must_use]
pub const fn hints(popup: &PopupState) -> &'static str {
    match popup {
        PopupState::None => {
            "q:Quit  Tab:Next link  Enter:Open  c:Copy  s:Select  r:Claim  i:Info"
        }
        PopupState::Selector => "Type:Filter  ^U:Clear  ↑↓:Move  Enter:Select  Esc:Cancel",
        PopupState::EarnRewardsInfo(_) => "l:Learn more  Esc:Close",
        PopupState::Message(_) => "Esc:Close",
    }
}

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(hints(&app.popup))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, sample_app};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_footer_displays_main_shortcuts() {
        let app = sample_app();
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_text(terminal.backend().buffer());
        for shortcut in ["q:Quit", "Tab:Next link", "c:Copy", "s:Select", "i:Info"] {
            assert!(content.contains(shortcut), "missing {shortcut}: {content}");
        }
    }

    #[test]
    fn test_selector_hints() {
        assert!(hints(&PopupState::Selector).contains("Esc:Cancel"));
    }
}
