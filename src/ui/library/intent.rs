use crate::catalog::{BookSummary, Category};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryIntent {
    Load { books: Vec<BookSummary> },
    SelectCategory(Category),
    /// Cycle the filter forward through the category list.
    NextCategory,
    PrevCategory,
    ToggleFilterMenu,
    MenuUp,
    MenuDown,
    /// Apply the highlighted menu entry and close the menu.
    ConfirmMenu,
    /// Move the grid selection by `delta` tiles, wrapping around the
    /// filtered list.
    MoveSelection(isize),
    /// Select the tile at this index of the filtered list.
    Select(usize),
}

impl Intent for LibraryIntent {}
