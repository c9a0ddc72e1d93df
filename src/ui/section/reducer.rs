use crate::ui::mvi::Reducer;

use super::intent::SectionIntent;
use super::state::SectionState;

pub struct SectionReducer;

impl Reducer for SectionReducer {
    type State = SectionState;
    type Intent = SectionIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SectionIntent::Loaded { reviews } if reviews.is_empty() => SectionState::Empty,
            SectionIntent::Loaded { reviews } => SectionState::Ready { reviews },
            SectionIntent::Failed { message } => SectionState::Error { message },
        }
    }
}
