//! Marker trait for reducer-owned state.

/// State values are cloned rather than mutated in place and compared to
/// decide whether a redraw is needed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
