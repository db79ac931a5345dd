use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub highlight: Color,   // Yellow for the element under inspection
    pub pivot: Color,       // Green for pivots and found elements
    pub left_part: Color,   // Blue for left partitions
    pub right_part: Color,  // Red for right partitions
    pub visited: Color,     // Orange for visited nodes
    pub backtracked: Color, // Teal for fully explored nodes
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),
    highlight: Color::Rgb(249, 226, 175),
    pivot: Color::Rgb(166, 227, 161),
    left_part: Color::Rgb(137, 180, 250),
    right_part: Color::Rgb(243, 139, 168),
    visited: Color::Rgb(250, 179, 135),
    backtracked: Color::Rgb(148, 226, 213),
};
