//! Reviews section lifecycle: Loading → Ready | Empty | Error.
//!
//! The fetcher folds handled failures into an empty list, so only a fetch
//! task that dies reaches `Error`.

mod intent;
mod reducer;
mod state;

pub use intent::SectionIntent;
pub use reducer::SectionReducer;
pub use state::SectionState;
