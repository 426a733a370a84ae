use crate::catalog::{filter, BookSummary, Category};
use crate::ui::mvi::UiState;

/// Category dropdown on the library header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterMenu {
    #[default]
    Closed,
    Open {
        /// Highlighted entry in `LibraryState::categories`.
        cursor: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LibraryState {
    pub books: Vec<BookSummary>,
    /// `All` followed by the distinct categories of `books`.
    pub categories: Vec<Category>,
    pub filter: Category,
    /// Index into the filtered list.
    pub selected: usize,
    pub menu: FilterMenu,
}

impl UiState for LibraryState {}

impl LibraryState {
    /// Books passing the active filter, in source order.
    pub fn visible_books(&self) -> Vec<&BookSummary> {
        filter(&self.books, &self.filter)
    }

    pub fn selected_book(&self) -> Option<&BookSummary> {
        self.visible_books().get(self.selected).copied()
    }

    pub fn is_menu_open(&self) -> bool {
        matches!(self.menu, FilterMenu::Open { .. })
    }

    pub(crate) fn category_index(&self, category: &Category) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }
}
