use serde::Serialize;

/// Identifier shared by library entries and reader routes.
pub type BookId = u32;

/// A book as shown on the library grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Cover image URL. Displayed as a reference only, never fetched.
    pub cover: String,
    /// Reading progress in percent (0-100). Decorative.
    pub progress: u8,
    pub category: String,
}

impl BookSummary {
    pub fn is_started(&self) -> bool {
        self.progress > 0
    }

    pub fn is_completed(&self) -> bool {
        self.progress >= 100
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    pub title: String,
    /// First page of the chapter (1-based).
    pub page: u32,
}

/// A book as opened in the reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDetail {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub total_pages: u32,
    pub chapters: Vec<Chapter>,
    pub content: String,
}

impl BookDetail {
    /// Chapter containing `page`: the last chapter whose starting page does
    /// not exceed it. `None` before the first chapter starts.
    pub fn chapter_for_page(&self, page: u32) -> Option<&Chapter> {
        self.chapters
            .iter()
            .take_while(|chapter| chapter.page <= page)
            .last()
    }

    /// Content split into paragraphs with surrounding indentation removed.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> BookDetail {
        BookDetail {
            id: 1,
            title: "T".to_string(),
            author: "A".to_string(),
            total_pages: 50,
            chapters: vec![
                Chapter {
                    title: "One".to_string(),
                    page: 1,
                },
                Chapter {
                    title: "Two".to_string(),
                    page: 17,
                },
            ],
            content: "\n   first\n\n   second  \n\n\n".to_string(),
        }
    }

    #[test]
    fn chapter_for_page_picks_latest_started_chapter() {
        let book = detail();
        assert_eq!(book.chapter_for_page(1).map(|c| c.title.as_str()), Some("One"));
        assert_eq!(book.chapter_for_page(16).map(|c| c.title.as_str()), Some("One"));
        assert_eq!(book.chapter_for_page(17).map(|c| c.title.as_str()), Some("Two"));
        assert_eq!(book.chapter_for_page(50).map(|c| c.title.as_str()), Some("Two"));
    }

    #[test]
    fn chapter_for_page_before_first_chapter() {
        assert!(detail().chapter_for_page(0).is_none());
    }

    #[test]
    fn paragraphs_are_trimmed_and_non_empty() {
        let book = detail();
        let paragraphs: Vec<&str> = book.paragraphs().collect();
        assert_eq!(paragraphs, vec!["first", "second"]);
    }
}
