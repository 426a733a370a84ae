use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::{BookId, BookSummary};
use crate::config::Config;
use crate::ui::reader::FontSize;

#[derive(Debug, Parser)]
#[command(name = "hondana", version, about = "Terminal e-book library and reader")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Start the library filtered to this category
    #[arg(long, value_name = "NAME")]
    pub category: Option<String>,

    /// Open the reader for this book id on start
    #[arg(long, value_name = "ID")]
    pub book: Option<BookId>,

    /// Initial reader font size (12-32)
    #[arg(
        long,
        value_name = "PX",
        value_parser = clap::value_parser!(u16)
            .range(i64::from(FontSize::MIN)..=i64::from(FontSize::MAX))
    )]
    pub font_size: Option<u16>,

    /// Start the reader in light mode
    #[arg(long)]
    pub light: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the library without starting the UI
    List {
        /// Only books in this category ("All" for every book)
        #[arg(long, value_name = "NAME")]
        category: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Applies command-line overrides on top of file configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(font_size) = self.font_size {
            config.reader.font_size = font_size;
        }
        if self.light {
            config.reader.dark_mode = false;
        }
    }
}

/// Formats books for `hondana list`.
pub fn format_books(books: &[&BookSummary], json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(books);
    }

    Ok(books
        .iter()
        .map(|book| {
            format!(
                "{:>3}  {:<26} {:<16} {:<10} {:>3}%\n",
                book.id, book.title, book.author, book.category, book.progress
            )
        })
        .collect())
}
