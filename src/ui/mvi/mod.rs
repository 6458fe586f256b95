//! Model-View-Intent building blocks.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain value holding everything a view needs
//! - **Intent**: a tap, a button press, a forced stage change
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
