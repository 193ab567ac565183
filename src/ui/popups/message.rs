//! Message popup rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Clear, Paragraph, Wrap},
};

use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

use super::render_help_footer;

/// Renders a message popup sized to its text.
///
/// # Arguments
///
/// * `frame` - The Ratatui frame to render to
/// * `area` - The terminal area to render within
/// * `message` - The message text to display (supports multi-line)
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let message_lines = message.lines().count().max(1) as u16;
    let longest_line = message
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u16;

    let popup_width = 40.max(longest_line + 6).min(area.width * 8 / 10);
    let popup_height = 6.max(message_lines + 4);
    let popup_area = centered_popup_area(area, popup_width, popup_height);

    let popup_block = create_popup_block("Message");
    let inner_area = popup_block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block, popup_area);

    let message_area = Rect::new(
        inner_area.x,
        inner_area.y,
        inner_area.width,
        inner_area.height.saturating_sub(2),
    );
    let prompt = Paragraph::new(message.to_string())
        .style(Style::default())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt, message_area);

    render_help_footer(frame, popup_area, "Esc:Close  Enter:Close");
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, test_terminal_80x24};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::*;

    #[rstest]
    #[case::short("Copied Vx1")]
    #[case::multiline("Line 1\nLine 2\nLine 3")]
    #[case::empty("")]
    #[case::long(
        "This is a very long message that should wrap properly when displayed in the popup window."
    )]
    fn test_message_popup_renders(
        mut test_terminal_80x24: Terminal<TestBackend>,
        #[case] message: &str,
    ) {
        test_terminal_80x24
            .draw(|frame| render(frame, frame.area(), message))
            .unwrap();

        let text = buffer_text(test_terminal_80x24.backend().buffer());
        assert!(text.contains(" Message "));
        assert!(text.contains("Esc:Close"));
        if let Some(first) = message.lines().next() {
            assert!(text.contains(first.split(' ').next().unwrap_or_default()));
        }
    }
}
