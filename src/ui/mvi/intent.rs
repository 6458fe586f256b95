//! Marker trait for intents.

/// Something that happened which may change a [`UiState`](super::UiState):
/// a user interaction or a transition requested by the owner of the state.
pub trait Intent: Send + 'static {}
