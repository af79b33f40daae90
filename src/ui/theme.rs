use ratatui::style::Color;

use crate::ui::sentiment::LabelCategory;

pub const ACCENT: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const SCORE_BAR: Color = Color::Rgb(0x81, 0x8c, 0xf8);
pub const TIME_TEXT: Color = Color::Rgb(0xc0, 0x84, 0xfc);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_NEUTRAL: Color = Color::Rgb(0xea, 0xb3, 0x08);

pub fn label_color(category: LabelCategory) -> Color {
    match category {
        LabelCategory::Positive => STATUS_OK,
        LabelCategory::Negative => STATUS_ERROR,
        LabelCategory::Other => STATUS_NEUTRAL,
    }
}
