use ratatui::style::Color;

pub const BRAND_PINK: Color = Color::Rgb(0xff, 0x6a, 0x95);
pub const BRAND_PURPLE: Color = Color::Rgb(0x20, 0x2a, 0x42);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUSED_BORDER: Color = Color::Rgb(0xff, 0x6a, 0x95);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
