use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x63, 0x66, 0xf1);
pub const ACCENT_STRONG: Color = Color::Rgb(0x4f, 0x46, 0xe5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const HEADER_TEXT: Color = Color::Rgb(0xf9, 0xfa, 0xfb);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const PANEL_BG: Color = Color::Rgb(0x1f, 0x29, 0x37);
pub const TRACK: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const INACTIVE_HIGHLIGHT: Color = Color::Rgb(0x4b, 0x55, 0x63);

/// Page colors for the reading area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderPalette {
    pub background: Color,
    pub text: Color,
}

impl ReaderPalette {
    pub const DARK: ReaderPalette = ReaderPalette {
        background: Color::Rgb(0x11, 0x18, 0x27),
        text: Color::Rgb(0xe5, 0xe7, 0xeb),
    };
    pub const LIGHT: ReaderPalette = ReaderPalette {
        background: Color::Rgb(0xf3, 0xf4, 0xf6),
        text: Color::Rgb(0x1f, 0x29, 0x37),
    };

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}
