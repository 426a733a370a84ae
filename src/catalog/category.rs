use std::fmt;

use crate::catalog::types::BookSummary;

/// Label of the sentinel category that matches every book.
pub const ALL_LABEL: &str = "All";

/// Library filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    /// Parses a user-supplied label. `"All"` (any case) maps to the sentinel.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case(ALL_LABEL) {
            Category::All
        } else {
            Category::Named(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::All => ALL_LABEL,
            Category::Named(name) => name,
        }
    }

    pub fn matches(&self, book: &BookSummary) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => book.category == *name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `All` followed by every distinct category in first-seen order.
pub fn categories(books: &[BookSummary]) -> Vec<Category> {
    let mut result = vec![Category::All];
    for book in books {
        let category = Category::Named(book.category.clone());
        if !result.contains(&category) {
            result.push(category);
        }
    }
    result
}

/// Books matching `category`, preserving source order.
pub fn filter<'a>(books: &'a [BookSummary], category: &Category) -> Vec<&'a BookSummary> {
    books.iter().filter(|book| category.matches(book)).collect()
}
