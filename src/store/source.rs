//! Dataset sources
//!
//! Where the snapshot comes from. The dashboard's canonical source is a
//! single GET to a static JSON URL; a local file is accepted too, decoded
//! the same way.

use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

use super::error::{FetchError, FetchResult};
use crate::record::Record;

pub use crate::record::DEFAULT_DATA_URL;

/// Anything that can produce the full record collection once
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Human-readable origin (URL or path), used in logs
    fn describe(&self) -> String;

    /// Fetch and decode the whole dataset. Called once per session.
    async fn fetch(&self) -> FetchResult<Vec<Record>>;
}

/// Decode a JSON array of records
pub fn decode_records(bytes: &[u8]) -> FetchResult<Vec<Record>> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Single unauthenticated GET, no retry
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create a source for `url`. `timeout` of `None` waits indefinitely.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> FetchResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> FetchResult<Vec<Record>> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await?;
        decode_records(&body)
    }
}

/// Dataset stored on the local filesystem
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> FetchResult<Vec<Record>> {
        let bytes = tokio::fs::read(&self.path).await?;
        decode_records(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use std::io::Write;

    const DATASET: &str = r#"[
        {"title": "Gas demand", "country": "USA", "sector": "Energy", "intensity": 6, "likelihood": 3},
        {"title": "Clinic costs", "country": "USA", "sector": "Health", "intensity": "", "likelihood": ""}
    ]"#;

    /// Serve a fixed set of routes on an ephemeral port, return the base URL
    async fn spawn_dataset_server() -> String {
        let app = Router::new()
            .route("/data.json", get(|| async { DATASET }))
            .route("/garbage", get(|| async { "<html>not json</html>" }))
            .route("/gone", get(|| async { StatusCode::NOT_FOUND }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_http_source_fetches_dataset() {
        let base = spawn_dataset_server().await;
        let source = HttpSource::new(format!("{}/data.json", base), None).unwrap();

        let records = source.fetch().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].intensity.as_deref(), Some("6"));
        assert_eq!(records[1].likelihood, None);
    }

    #[tokio::test]
    async fn test_http_source_non_success_status() {
        let base = spawn_dataset_server().await;
        let source = HttpSource::new(format!("{}/gone", base), None).unwrap();

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_http_source_non_json_body() {
        let base = spawn_dataset_server().await;
        let source = HttpSource::new(format!("{}/garbage", base), None).unwrap();

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_file_source_reads_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();

        let source = FileSource::new(file.path());
        let records = source.fetch().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.json"));

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
    }

    #[test]
    fn test_decode_records_requires_array() {
        assert!(decode_records(br#"{"title": "x"}"#).is_err());
        assert!(decode_records(b"[]").unwrap().is_empty());
    }
}
