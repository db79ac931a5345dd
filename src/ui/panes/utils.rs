//! Shared helpers for pane rendering

use crate::trace::Element;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};

/// Bordered block with the pane title, highlighted when focused.
pub fn pane_block(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            DEFAULT_THEME.border_focused
        } else {
            DEFAULT_THEME.border_normal
        }))
}

/// Join elements with `", "` for inline display.
pub fn join_elements(items: &[Element]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
