use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: `(State, Intent) -> State`.
///
/// Side effects (spawning the fetch, drawing) stay with the caller.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Fold a sequence of intents, oldest first.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
