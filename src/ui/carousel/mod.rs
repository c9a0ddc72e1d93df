//! Looping review carousel.
//!
//! - `state.rs` - working list, index, transition phase, pause sources, timers
//! - `intent.rs` - navigation, gestures, hover, ticks
//! - `reducer.rs` - state transitions (pure, no side effects)
//! - `geometry.rs` - breakpoints, track offset, indicator mapping
//!
//! Loop trick: the working list is padded with a clone at each end. A
//! transition may land on a clone; when it settles the index is swapped for
//! the real slide with animation suppressed for one frame.

pub mod geometry;
mod intent;
mod reducer;
mod state;

pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use state::{CarouselState, Gesture, GestureKind, Phase, SlideEmphasis};
