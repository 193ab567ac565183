//! Delegation selector popup.
//!
//! A query line above the filtered delegations. The row matching the
//! transaction's current validator is checked; the highlighted row is the
//! one Enter will pick.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
};

use crate::delegation::{DelegationQuerySelector, MappedDelegation, SelectorContext};
use crate::i18n::{t, t_with};
use crate::theme::{HIGHLIGHT_STYLE, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, TEXT_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

use super::render_help_footer;

const POPUP_WIDTH: u16 = 76;

/// One option row.
#[must_use]
pub fn option_line(option: &MappedDelegation, checked: bool, context: SelectorContext) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            if checked { "✓ " } else { "  " },
            Style::default().fg(SUCCESS_COLOR),
        ),
        Span::styled(
            format!("{:<28}", option.display_name()),
            Style::default().fg(TEXT_COLOR),
        ),
        Span::styled(
            format!("{:>16}", option.formatted_amount),
            Style::default().fg(TEXT_COLOR),
        ),
    ];
    match context {
        SelectorContext::ClaimRewards => spans.push(Span::styled(
            format!("  +{}", option.formatted_pending_rewards),
            Style::default().fg(SUCCESS_COLOR),
        )),
        SelectorContext::General => spans.push(Span::styled(
            format!("  {}", option.status.as_str()),
            Style::default().fg(MUTED_COLOR),
        )),
    }
    Line::from(spans)
}

/// Renders the selector popup.
pub fn render(frame: &mut Frame, area: Rect, selector: &DelegationQuerySelector) {
    let option_rows = u16::try_from(selector.options().len().max(1)).unwrap_or(u16::MAX);
    let popup_height = option_rows.saturating_add(8).min(area.height);
    let popup_area = centered_popup_area(area, POPUP_WIDTH, popup_height);
    let block = create_popup_block(&t(selector.context().label_key()));
    let inner = block.inner(popup_area);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 4 {
        return;
    }

    let query_line = if selector.query().is_empty() {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(PRIMARY_COLOR)),
            Span::styled(t("common.selectAccount"), Style::default().fg(MUTED_COLOR)),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(PRIMARY_COLOR)),
            Span::styled(selector.query().to_string(), Style::default().fg(TEXT_COLOR)),
        ])
    };
    frame.render_widget(
        Paragraph::new(query_line),
        Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1),
    );

    let list_area = Rect::new(
        inner.x + 1,
        inner.y + 2,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(4),
    );

    if selector.options().is_empty() {
        let empty = t_with(
            "common.selectValidatorNoOption",
            &[("accountName", selector.query())],
        );
        frame.render_widget(
            Paragraph::new(empty).style(Style::default().fg(MUTED_COLOR)),
            list_area,
        );
    } else {
        let checked = selector.value().map(|v| v.stake_account_address.as_str());
        let items: Vec<ListItem> = selector
            .options()
            .iter()
            .map(|option| {
                let is_checked = checked == Some(option.stake_account_address.as_str());
                ListItem::new(option_line(option, is_checked, selector.context()))
            })
            .collect();
        let mut state = ListState::default().with_selected(selector.highlighted());
        frame.render_stateful_widget(
            List::new(items).highlight_style(HIGHLIGHT_STYLE),
            list_area,
            &mut state,
        );
    }

    render_help_footer(frame, popup_area, "Enter:Select  Esc:Cancel");
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SolanaTransaction, TransactionMode};
    use crate::test_utils::{
        AccountMother, DelegationMother, acme_catalog, buffer_text, sample_app, test_terminal,
        test_terminal_80x24,
    };
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::*;

    fn selector(context: SelectorContext) -> DelegationQuerySelector {
        let app = sample_app();
        let account = app.snapshot.main_account().unwrap();
        let tx = app.snapshot.transaction.as_solana().unwrap();
        DelegationQuerySelector::new(account, tx, &app.snapshot.validators, context)
    }

    fn draw(terminal: &mut Terminal<TestBackend>, selector: &DelegationQuerySelector) -> String {
        terminal
            .draw(|frame| render(frame, frame.area(), selector))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[rstest]
    fn test_general_selector(mut test_terminal: Terminal<TestBackend>) {
        let selector = selector(SelectorContext::General);
        let text = draw(&mut test_terminal, &selector);

        assert!(text.contains(" Validator "));
        assert!(text.contains("Select an account"));
        assert!(text.contains("✓ Acme Validator"));
        assert!(text.contains("Borealis Stake"));
        assert!(text.contains("AnonVote7"));
        assert!(text.contains("deactivating"));
    }

    #[rstest]
    fn test_claim_rewards_selector(mut test_terminal: Terminal<TestBackend>) {
        let selector = selector(SelectorContext::ClaimRewards);
        let text = draw(&mut test_terminal, &selector);

        assert!(text.contains("Select the delegation to claim rewards from"));
        assert!(!text.contains("Acme Validator"));
        assert!(text.contains("+0.12 SOL"));
    }

    #[rstest]
    fn test_no_match_message(mut test_terminal: Terminal<TestBackend>) {
        let mut selector = selector(SelectorContext::General);
        selector.set_query("zzz");
        let text = draw(&mut test_terminal, &selector);
        assert!(text.contains("No validator matching \"zzz\""));
    }

    #[rstest]
    fn test_more_rows_than_u16_fit_on_screen(mut test_terminal_80x24: Terminal<TestBackend>) {
        let delegations = (0..=usize::from(u16::MAX))
            .map(|i| DelegationMother::with_rewards(&format!("Vote{i}"), 1_000_000_000, 0))
            .collect();
        let account = AccountMother::solana(delegations);
        let selector = DelegationQuerySelector::new(
            &account,
            &SolanaTransaction::new(TransactionMode::Undelegate),
            &acme_catalog(),
            SelectorContext::General,
        );
        let text = draw(&mut test_terminal_80x24, &selector);

        assert!(text.contains("Vote0"));
        assert!(text.contains("Esc:Cancel"));
    }
}
