//! Model-View-Intent primitives shared by the library and reader views.
//!
//! ```text
//! key / mouse ──→ Intent ──→ Reducer ──→ State ──→ render
//!       ↑                                            │
//!       └────────────────────────────────────────────┘
//! ```
//!
//! Every state transition in the UI goes through a reducer, so the
//! bounded-update rules (font size, page counter, filter selection) live in
//! one place and can be tested without a terminal.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
