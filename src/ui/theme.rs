use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub status_bg: Color,
    pub bar: Color,
    pub bar_highlight: Color, // Pair under comparison
    pub bar_sorted: Color,
    pub title: Color, // Yellow status text
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    status_bg: Color::Rgb(50, 50, 70),
    bar: Color::Rgb(205, 214, 244),           // White-ish bars
    bar_highlight: Color::Rgb(250, 179, 135), // Orange for compared pair
    bar_sorted: Color::Rgb(166, 227, 161),    // Green once sorted
    title: Color::Rgb(249, 226, 175),
};
