use ratatui::style::Color;

pub const SELECTED_BG: Color = Color::Rgb(50, 50, 80);
pub const STATUS_BG: Color = Color::Rgb(30, 30, 40);
pub const ACCENT: Color = Color::Rgb(140, 115, 200);
pub const HEADER_BG: Color = Color::Rgb(25, 25, 38);
pub const SEPARATOR: Color = Color::Rgb(55, 55, 75);
pub const FILTER_COLOR: Color = Color::Cyan;
pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
pub const BORDER_COLOR: Color = Color::Rgb(70, 70, 95);
pub const FORK_BADGE: Color = Color::Rgb(150, 150, 170);
pub const STAR_COLOR: Color = Color::Yellow;
pub const ERROR_FG: Color = Color::LightRed;

/// `#rrggbb` swatch to a terminal color; anything else renders gray.
pub fn hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Color::Gray;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Gray,
    }
}
