//! Fetch error types
//!
//! Every way loading the dataset can fail. None of these escape the
//! store: `RecordStore::load` logs them and keeps the snapshot empty.

use thiserror::Error;

/// Errors that can occur while fetching the dataset
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-level failure (DNS, connect, TLS, body read)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// Body is not a JSON array of records
    #[error("Invalid dataset: {0}")]
    Decode(#[from] serde_json::Error),

    /// Local dataset file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be constructed
    #[error("Client error: {0}")]
    Client(String),
}

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Status {
            status: 404,
            url: "http://localhost/data.json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 404 from http://localhost/data.json"
        );
    }

    #[test]
    fn test_decode_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: FetchError = json_err.into();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
