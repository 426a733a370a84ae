//! Built-in sample data. The application ships without a book store, so
//! both views are backed by these constants.

use crate::catalog::types::{BookDetail, BookSummary, Chapter};

const COVER_BASE: &str = "https://www.norli.no/media/catalog/product/9/7";
const COVER_QUERY: &str = "?auto=webp&format=pjpg&width=960&height=1200&fit=cover";

const SAMPLE_CONTENT: &str = "
      Between life and death there is a library, and within that library, the shelves go on forever. Every book provides a chance to try another life you could have lived. To see how things would be if you had made other choices... Would you have done anything different, if you had the chance to undo your regrets?

      A dazzling novel about all the choices that go into a life well lived, from the internationally bestselling author of Reasons to Stay Alive and How To Stop Time.

      Somewhere out beyond the edge of the universe there is a library that contains an infinite number of books, each one the story of another reality. One tells the story of your life as it is, along with another book for the other life you could have lived if you had made a different choice at any point in your life. While we all wonder how our lives might have been, what if you had the chance to go to the library and see for yourself? Would any of these other lives truly be better?

      In The Midnight Library, Matt Haig's enchanting blockbuster novel, Nora Seed finds herself faced with this decision. Faced with the possibility of changing her life for a new one, following a different career, undoing old breakups, realizing her dreams of becoming a glaciologist; she must search within herself as she travels through the Midnight Library to decide what is truly fulfilling in life, and what makes it worth living in the first place.
    ";

fn summary(
    id: u32,
    title: &str,
    author: &str,
    cover_file: &str,
    progress: u8,
    category: &str,
) -> BookSummary {
    BookSummary {
        id,
        title: title.to_string(),
        author: author.to_string(),
        cover: format!("{COVER_BASE}/{cover_file}{COVER_QUERY}"),
        progress,
        category: category.to_string(),
    }
}

/// The six books on the library grid, in display order.
pub fn library() -> Vec<BookSummary> {
    vec![
        summary(1, "The Midnight Library", "Matt Haig", "9781786892737_1_4.jpg", 65, "Fiction"),
        summary(2, "Atomic Habits", "James Clear", "9781847941831_1.jpg", 30, "Self-Help"),
        summary(3, "Project Hail Mary", "Andy Weir", "9781529157468_1_2.jpg", 0, "Sci-Fi"),
        summary(4, "The Psychology of Money", "Morgan Housel", "9780857197689_1.jpg", 85, "Finance"),
        summary(5, "Dune", "Frank Herbert", "9780340960196_1_1.jpg", 42, "Sci-Fi"),
        summary(6, "The Alchemist", "Paulo Coelho", "9780008144227_1_1.jpg", 100, "Fiction"),
    ]
}

/// The single book every reader route opens.
pub fn detail() -> BookDetail {
    let chapter = |title: &str, page| Chapter {
        title: title.to_string(),
        page,
    };
    BookDetail {
        id: 1,
        title: "The Midnight Library".to_string(),
        author: "Matt Haig".to_string(),
        total_pages: 283,
        chapters: vec![
            chapter("Chapter 1", 1),
            chapter("Chapter 2", 17),
            chapter("Chapter 3", 35),
        ],
        content: SAMPLE_CONTENT.to_string(),
    }
}
