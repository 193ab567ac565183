//! Staking starter popup.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::delegation::EarnRewardsInfo;
use crate::theme::{PRIMARY_COLOR, TEXT_COLOR, WARNING_STYLE};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

use super::render_help_footer;

const POPUP_WIDTH: u16 = 72;
const POPUP_HEIGHT: u16 = 18;

/// Lines of the starter content.
#[must_use]
pub fn info_lines(info: &EarnRewardsInfo) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            info.description.clone(),
            Style::default().fg(TEXT_COLOR),
        )),
        Line::default(),
    ];
    lines.extend(
        info.bullets
            .iter()
            .map(|bullet| Line::from(format!("  • {bullet}"))),
    );
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(info.warning.clone(), WARNING_STYLE)));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::raw(format!("{} ", info.learn_more_label)),
        Span::styled(
            info.learn_more_url,
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]));
    lines
}

/// Renders the earn-rewards popup.
pub fn render(frame: &mut Frame, area: Rect, info: &EarnRewardsInfo) {
    let popup_area = centered_popup_area(area, POPUP_WIDTH, POPUP_HEIGHT);
    let block = create_popup_block("Earn rewards");
    let inner = block.inner(popup_area);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    let content_area = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(2),
    );
    frame.render_widget(
        Paragraph::new(info_lines(info)).wrap(Wrap { trim: true }),
        content_area,
    );

    render_help_footer(frame, popup_area, "l:Learn more  Esc:Close");
}
