//! HTTP client for the reviews endpoint.
//!
//! One GET, no retries, no timeout. Every failure is logged and folded into
//! an empty list by [`ReviewsClient::fetch_reviews`].

use reqwest::{Client, Url};

use crate::config::ApiConfig;

use super::error::{ClientError, FetchError};
use super::model::{Review, ReviewsResponse};

pub struct ReviewsClient {
    client: Client,
    url: Url,
}

impl ReviewsClient {
    /// Build a client for `{base_url}{endpoint}`.
    pub fn new(api: &ApiConfig) -> Result<Self, ClientError> {
        let raw = format!("{}{}", api.base_url.trim_end_matches('/'), api.endpoint);
        let url = Url::parse(&raw).map_err(|e| ClientError::InvalidUrl {
            url: raw.clone(),
            message: e.to_string(),
        })?;
        let client = Client::builder().build()?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch reviews, logging and swallowing any failure.
    pub async fn fetch_reviews(&self) -> Vec<Review> {
        match self.try_fetch_reviews().await {
            Ok(reviews) => {
                tracing::info!(url = %self.url, count = reviews.len(), "Fetched reviews");
                reviews
            }
            Err(err) => {
                tracing::error!(
                    url = %self.url,
                    kind = err.kind(),
                    error = %err,
                    "Error fetching reviews"
                );
                Vec::new()
            }
        }
    }

    /// Fetch reviews and report the classified failure.
    pub async fn try_fetch_reviews(&self) -> Result<Vec<Review>, FetchError> {
        tracing::debug!(url = %self.url, "Requesting reviews");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|source| self.network_error(source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| self.network_error(source))?;

        let parsed: ReviewsResponse =
            serde_json::from_slice(&body).map_err(|source| FetchError::Shape { source })?;
        Ok(parsed.into_reviews())
    }

    fn network_error(&self, source: reqwest::Error) -> FetchError {
        FetchError::Network {
            url: self.url.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str, endpoint: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            endpoint: endpoint.to_string(),
        }
    }

    #[test]
    fn joins_base_url_and_endpoint() {
        let client = ReviewsClient::new(&api("http://localhost:8000/", "/api/reviews")).unwrap();
        assert_eq!(client.url().as_str(), "http://localhost:8000/api/reviews");
    }

    #[test]
    fn rejects_unparseable_url() {
        let result = ReviewsClient::new(&api("not a url", "/api/reviews"));
        assert!(matches!(result, Err(ClientError::InvalidUrl { .. })));
    }
}
