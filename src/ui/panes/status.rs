//! Status bar rendering with keybindings and playback state

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    position: usize,
    total: usize,
    is_playing: bool,
) {
    // Split status bar into left and right
    let layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(55),
            ratatui::layout::Constraint::Percentage(45),
        ])
        .split(area);

    // Left side: step position and status message
    let step_text = if total == 0 {
        " Step -/- ".to_string()
    } else {
        format!(" Step {}/{} ", position + 1, total)
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(if is_playing {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    // Right side: keybinding hints
    let right = Paragraph::new(Line::from(Span::styled(
        " ←/→ step | Space play | 1-9 multi-step | Enter end | Backspace start | q quit ",
        Style::default()
            .bg(DEFAULT_THEME.current_line_bg)
            .fg(DEFAULT_THEME.comment),
    )))
    .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
    .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
