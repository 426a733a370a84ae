use crate::catalog::{BookDetail, BookId, Catalog};
use crate::config::ReaderConfig;
use crate::ui::layout::{grid_columns, layout_regions};
use crate::ui::library::{LibraryIntent, LibraryReducer, LibraryState};
use crate::ui::mvi::Reducer;
use crate::ui::reader::{FontSize, ReaderIntent, ReaderReducer, ReaderState};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Screen currently shown.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    Library,
    Reader { book_id: BookId },
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    route: Route,
    size: Option<(u16, u16)>,
    catalog: Catalog,
    reader_defaults: ReaderConfig,
    /// State of the library grid (MVI pattern).
    pub library: LibraryState,
    /// State of the reader (MVI pattern). Reset on every open.
    pub reader: ReaderState,
    last_interaction: Instant,
}

impl App {
    pub fn new(catalog: Catalog, reader_defaults: ReaderConfig) -> Self {
        let mut app = Self {
            should_quit: false,
            route: Route::Library,
            size: None,
            catalog,
            reader_defaults,
            library: LibraryState::default(),
            reader: ReaderState::default(),
            last_interaction: Instant::now(),
        };
        let books = app.catalog.books().to_vec();
        app.dispatch_library(LibraryIntent::Load { books });
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Book shown by the reader route.
    pub fn current_book(&self) -> &BookDetail {
        self.catalog.detail(self.reader.book_id)
    }

    pub fn dispatch_library(&mut self, intent: LibraryIntent) {
        tracing::trace!(?intent, "library intent");
        dispatch_mvi!(self, library, LibraryReducer, intent);
    }

    pub fn dispatch_reader(&mut self, intent: ReaderIntent) {
        tracing::trace!(?intent, "reader intent");
        dispatch_mvi!(self, reader, ReaderReducer, intent);
    }

    /// Navigate to the reader for `book_id`.
    ///
    /// The id is kept on the route and in the reader state, but the content
    /// always comes from the catalog's single detailed book.
    pub fn open_book(&mut self, book_id: BookId) {
        let total_pages = self.catalog.detail(book_id).total_pages;
        tracing::info!(book_id, total_pages, "opening reader");
        self.route = Route::Reader { book_id };
        self.dispatch_reader(ReaderIntent::Open {
            book_id,
            total_pages,
            font_size: FontSize::new(self.reader_defaults.font_size),
            dark_mode: self.reader_defaults.dark_mode,
        });
        self.last_interaction = Instant::now();
    }

    /// Opens the book under the grid cursor. Returns false if the filtered
    /// list is empty.
    pub fn open_selected(&mut self) -> bool {
        let Some(book_id) = self.library.selected_book().map(|book| book.id) else {
            return false;
        };
        self.open_book(book_id);
        true
    }

    pub fn back_to_library(&mut self) {
        if let Route::Reader { book_id } = self.route {
            tracing::info!(book_id, page = self.reader.page, "leaving reader");
        }
        self.route = Route::Library;
        self.reader = ReaderState::default();
    }

    /// Any input inside the reader: record activity and show controls.
    pub fn touch(&mut self, now: Instant) {
        self.last_interaction = now;
        if matches!(self.route, Route::Reader { .. }) {
            self.dispatch_reader(ReaderIntent::Interact);
        }
    }

    pub fn on_tick(&mut self) {
        self.on_tick_at(Instant::now());
    }

    /// Hides reader controls once the configured inactivity interval has
    /// passed. No-op when auto-hide is disabled.
    pub fn on_tick_at(&mut self, now: Instant) {
        let Some(hide_after) = self.reader_defaults.auto_hide_controls_ms else {
            return;
        };
        if !matches!(self.route, Route::Reader { .. }) || !self.reader.controls_visible {
            return;
        }
        if now.saturating_duration_since(self.last_interaction) >= Duration::from_millis(hide_after)
        {
            tracing::debug!("hiding reader controls after inactivity");
            self.dispatch_reader(ReaderIntent::HideControls);
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Full terminal area at the last known size.
    pub fn screen(&self) -> Rect {
        let (cols, rows) = self.size.unwrap_or((80, 24));
        Rect::new(0, 0, cols, rows)
    }

    /// Tiles per row of the library grid for the last known terminal size.
    pub fn grid_columns(&self) -> u16 {
        let (_, body, _) = layout_regions(self.screen());
        grid_columns(body.width)
    }
}
