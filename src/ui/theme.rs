use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x7c, 0x5c, 0xff);
pub const STAR_FILLED: Color = Color::Rgb(0xff, 0xb8, 0x00);
pub const STAR_EMPTY: Color = Color::Rgb(0x4b, 0x4b, 0x4b);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CARD_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const CARD_TEXT: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
