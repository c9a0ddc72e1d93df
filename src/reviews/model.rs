use serde::{Deserialize, Serialize};

/// Highest rating a review can carry.
pub const MAX_RATING: u8 = 5;

/// A single customer review as served by the reviews endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Unique, stable identifier.
    pub id: i64,
    pub title: String,
    /// Review body.
    pub text: String,
    /// Star rating, 0 to 5.
    pub rating: u8,
}

impl Review {
    /// Rating clamped to the displayable range.
    pub fn stars(&self) -> u8 {
        self.rating.min(MAX_RATING)
    }
}

/// Body shapes accepted from `GET /api/reviews`.
///
/// The backend answers with `{ "items": [...], "total": n }`; a bare array is
/// tolerated as well. Anything else fails to deserialize.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ReviewsResponse {
    Paged {
        items: Vec<Review>,
        #[serde(default)]
        total: Option<u64>,
    },
    Bare(Vec<Review>),
}

impl ReviewsResponse {
    pub fn into_reviews(self) -> Vec<Review> {
        match self {
            ReviewsResponse::Paged { items, .. } => items,
            ReviewsResponse::Bare(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paged_shape_parses() {
        let body = r#"{"items":[{"id":1,"title":"Great","text":"Loved it","rating":5}],"total":1}"#;
        let parsed: ReviewsResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(parsed, ReviewsResponse::Paged { total: Some(1), .. }));
        assert_eq!(parsed.into_reviews().len(), 1);
    }

    #[test]
    fn items_without_total_parses() {
        let parsed: ReviewsResponse = serde_json::from_str(r#"{"items":[]}"#).unwrap();
        assert!(parsed.into_reviews().is_empty());
    }

    #[test]
    fn bare_array_parses() {
        let body = r#"[{"id":7,"title":"Ok","text":"Fine","rating":3}]"#;
        let parsed: ReviewsResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(parsed, ReviewsResponse::Bare(_)));
        assert_eq!(parsed.into_reviews()[0].id, 7);
    }

    #[test]
    fn unknown_shapes_are_rejected() {
        assert!(serde_json::from_str::<ReviewsResponse>(r#"{"foo":1}"#).is_err());
        assert!(serde_json::from_str::<ReviewsResponse>(r#"{"items":"nope"}"#).is_err());
        assert!(serde_json::from_str::<ReviewsResponse>("42").is_err());
    }

    #[test]
    fn stars_clamp_to_five() {
        let review = Review {
            id: 1,
            title: String::new(),
            text: String::new(),
            rating: 9,
        };
        assert_eq!(review.stars(), 5);
    }
}
