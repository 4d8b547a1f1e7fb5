use colored::Color;

pub const PRIMARY: Color = Color::TrueColor {
    r: 0x49,
    g: 0x9C,
    b: 0x54,
};
pub const ACCENT: Color = Color::TrueColor {
    r: 0x00,
    g: 0x66,
    b: 0x8B,
};
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

// Indicator
pub const NEUTRAL: Color = Color::Yellow;
pub const REACHABLE: Color = Color::Green;
pub const UNREACHABLE: Color = Color::Red;
