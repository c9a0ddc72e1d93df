use crate::reviews::Review;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SectionIntent {
    /// Fetch finished; the list may be empty.
    Loaded { reviews: Vec<Review> },
    /// Fetch task panicked or was cancelled.
    Failed { message: String },
}

impl Intent for SectionIntent {}
