//! Header rendering: app name and the account being operated on.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, TEXT_COLOR};

use super::helpers::create_border_block;

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if inner.height == 0 {
        return;
    }

    let logo = Line::from(vec![
        Span::styled("[", Style::default().fg(MUTED_COLOR)),
        Span::styled(
            "lazystake",
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("]", Style::default().fg(MUTED_COLOR)),
    ]);
    let [left, right] =
        Layout::horizontal([Constraint::Length(12), Constraint::Min(0)]).areas(inner);
    frame.render_widget(Paragraph::new(logo).alignment(Alignment::Left), left);

    if let Ok(account) = app.snapshot.main_account() {
        let account_line = Line::from(vec![
            Span::styled(account.name.clone(), Style::default().fg(TEXT_COLOR)),
            Span::styled(
                format!(" ({}) ", account.currency.ticker),
                Style::default().fg(MUTED_COLOR),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(account_line).alignment(Alignment::Right),
            right,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, sample_app};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_header_shows_account() {
        let app = sample_app();
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        let middle = text.lines().nth(1).unwrap();
        assert!(middle.contains("[lazystake]"));
        assert!(middle.contains("Solana 1 (SOL)"));
    }
}
