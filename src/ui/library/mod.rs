mod grid;
mod intent;
mod reducer;
mod state;

pub use grid::render_library;
pub(crate) use grid::{is_on_menu, menu_entry_at, visible_tiles};
pub use intent::LibraryIntent;
pub use reducer::LibraryReducer;
pub use state::{FilterMenu, LibraryState};
