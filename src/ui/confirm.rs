//! Confirmation screen rendering.
//!
//! Shows the title, the warning banner and every rendered field. The focused
//! explorer link is highlighted wherever its address appears.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::confirm::ConfirmScreen;
use crate::state::App;
use crate::theme::{HIGHLIGHT_STYLE, MUTED_COLOR, TEXT_COLOR, WARNING_STYLE};

use super::helpers::create_border_block;

/// Renders the confirmation screen, or why it cannot be shown.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block("Confirm", app.popup == crate::state::PopupState::None);

    let lines = match &app.screen {
        Ok(screen) => screen_lines(screen, app.focused_link().map(|l| l.address.as_str())),
        Err(err) => vec![Line::from(Span::styled(
            format!("Cannot show this transaction: {err}"),
            WARNING_STYLE,
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Lines of a confirmation screen.
///
/// # Arguments
///
/// * `screen` - The built screen
/// * `focused` - Address of the focused link, highlighted where shown
#[must_use]
pub fn screen_lines(screen: &ConfirmScreen, focused: Option<&str>) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            screen.title.clone(),
            Style::default()
                .fg(TEXT_COLOR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    if let Some(warning) = &screen.warning {
        lines.push(Line::from(Span::styled(
            format!("⚠ {}", warning.message),
            WARNING_STYLE,
        )));
        lines.push(Line::default());
    }

    for field in &screen.fields {
        for mut line in field.to_lines() {
            if let Some(address) = focused {
                highlight_link(&mut line, address);
            }
            lines.push(line);
        }
    }

    if screen.show_fees {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Fees are set on the next step",
            Style::default().fg(MUTED_COLOR),
        )));
    }

    lines
}

fn highlight_link(line: &mut Line<'static>, address: &str) {
    for span in &mut line.spans {
        if span.style.add_modifier.contains(Modifier::UNDERLINED) && span.content == address {
            span.style = span.style.patch(HIGHLIGHT_STYLE);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
