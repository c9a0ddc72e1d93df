//! Model-View-Intent primitives shared by the UI features.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are the only place state changes. Time enters through intents
//! (`Tick { now }` and friends), so every transition is reproducible in tests
//! without a clock or a terminal.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
