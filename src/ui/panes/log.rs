//! Step log pane: labels of the steps applied so far

use super::utils::pane_block;
use crate::trace::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the step log: labels up to and including the cursor position, the
/// current one highlighted.
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    steps: &[Step],
    position: usize,
    focused: bool,
    scroll: &mut usize,
) {
    let mut lines: Vec<Line> = Vec::new();
    for (i, step) in steps.iter().take(position + 1).enumerate() {
        let style = if i == position {
            Style::default()
                .fg(DEFAULT_THEME.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        lines.push(Line::from(Span::styled(
            format!("{:>4}. {}", i + 1, step.label),
            style,
        )));
    }

    // usize::MAX means "stick to bottom" (set after every step)
    let visible = area.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(visible);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(lines)
        .block(pane_block("Steps", focused))
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}
