mod intent;
mod panel;
mod reducer;
mod state;
mod view;

pub use intent::ReaderIntent;
pub(crate) use panel::panel_intent_at;
pub use reducer::ReaderReducer;
pub use state::{FontSize, ReaderState};
pub use view::render_reader;
