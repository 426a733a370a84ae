/// Marker trait for view state.
///
/// View states are plain values: cloned to produce the next state, compared
/// to detect changes, and defaulted before the view is first opened.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
