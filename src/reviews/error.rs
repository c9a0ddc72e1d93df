use thiserror::Error;

/// Reasons a reviews fetch can fail.
///
/// All of them end up as an empty list for the UI; the variants exist for
/// logging and tests.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request could not be sent or the body could not be read.
    #[error("Request to '{url}' failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// Body is neither `{items: [...]}` nor a bare array.
    #[error("Invalid response format: {source}")]
    Shape {
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Short label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "network",
            FetchError::Status { .. } => "status",
            FetchError::Shape { .. } => "shape",
        }
    }
}

/// Errors building the HTTP client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid reviews URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_includes_code() {
        let err = FetchError::Status { status: 500 };
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert_eq!(err.kind(), "status");
    }

    #[test]
    fn shape_error_kind() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = FetchError::Shape { source };
        assert_eq!(err.kind(), "shape");
        assert!(err.to_string().starts_with("Invalid response format"));
    }
}
