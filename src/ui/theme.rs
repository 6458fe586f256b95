use ratatui::style::Color;

pub const LEMON_YELLOW: Color = Color::Rgb(0xf9, 0xe4, 0x4c);
pub const LEAF_GREEN: Color = Color::Rgb(0xc3, 0xec, 0xd2);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BUTTON_TEXT: Color = Color::Rgb(0x1c, 0x1b, 0x1f);
pub const BUTTON_DISABLED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
