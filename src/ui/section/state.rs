use crate::reviews::Review;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SectionState {
    #[default]
    Loading,
    Ready { reviews: Vec<Review> },
    /// No reviews, or the fetch failed in a handled way.
    Empty,
    Error { message: String },
}

impl UiState for SectionState {}

impl SectionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn reviews(&self) -> &[Review] {
        match self {
            Self::Ready { reviews } => reviews,
            _ => &[],
        }
    }
}
