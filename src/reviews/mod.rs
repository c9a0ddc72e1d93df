//! Review data model and the client that fetches it.

mod client;
mod error;
mod model;

pub use client::ReviewsClient;
pub use error::{ClientError, FetchError};
pub use model::{Review, ReviewsResponse, MAX_RATING};
