//! In-memory book catalog backing the library and reader views.

mod category;
pub mod sample;
mod types;

pub use category::{categories, filter, Category, ALL_LABEL};
pub use types::{BookDetail, BookId, BookSummary, Chapter};

/// Read-only access to the books the application knows about.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<BookSummary>,
    detail: BookDetail,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl Catalog {
    pub fn new(books: Vec<BookSummary>, detail: BookDetail) -> Self {
        Self { books, detail }
    }

    pub fn sample() -> Self {
        Self::new(sample::library(), sample::detail())
    }

    pub fn books(&self) -> &[BookSummary] {
        &self.books
    }

    pub fn summary(&self, id: BookId) -> Option<&BookSummary> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Detail for the reader. There is only one detailed book, so every id
    /// resolves to it.
    pub fn detail(&self, id: BookId) -> &BookDetail {
        if id != self.detail.id {
            tracing::debug!(
                requested = id,
                served = self.detail.id,
                "no detail for requested book, serving sample"
            );
        }
        &self.detail
    }
}
