mod intent;
mod reducer;
mod state;

pub use intent::StageIntent;
pub use reducer::StageReducer;
pub use state::StageState;
