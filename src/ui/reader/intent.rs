use crate::catalog::BookId;
use crate::ui::mvi::Intent;
use crate::ui::reader::state::FontSize;

#[derive(Debug, Clone, PartialEq)]
pub enum ReaderIntent {
    /// Enter the reader for a book. Resets every field.
    Open {
        book_id: BookId,
        total_pages: u32,
        font_size: FontSize,
        dark_mode: bool,
    },
    NextPage,
    PrevPage,
    /// "A+" control.
    IncreaseFont,
    /// "A-" control.
    DecreaseFont,
    /// Slider input. Out-of-range values are clamped.
    SetFontSize(u16),
    ToggleTheme,
    ToggleSettings,
    /// Any click or key press inside the reader.
    Interact,
    /// Inactivity timeout: hides controls and closes the settings panel.
    HideControls,
}

impl Intent for ReaderIntent {}
