//! Where the OpenAPI document comes from

use std::path::PathBuf;

use adviser_core::HttpClient;
use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::{CrdError, Result};

/// Upstream location of the Cloudflare OpenAPI document
pub const CLOUDFLARE_OPENAPI_URL: &str =
    "https://raw.githubusercontent.com/cloudflare/api-schemas/main/openapi.json";

/// A source the OpenAPI document can be loaded from
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human-readable location, used in diagnostics
    fn describe(&self) -> String;

    /// Load and parse the document
    async fn load(&self) -> Result<JsonValue>;
}

/// Document served over HTTP(S)
pub struct HttpSource {
    client: HttpClient,
    url: String,
}

impl HttpSource {
    pub fn new(client: HttpClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<JsonValue> {
        tracing::debug!("Fetching OpenAPI document from {}", self.url);
        self.client
            .get_json(&self.url)
            .await
            .map_err(|e| CrdError::SourceUnavailable {
                source_name: self.url.clone(),
                reason: e.to_string(),
            })
    }
}

/// Document stored on the local filesystem
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<JsonValue> {
        let unavailable = |reason: String| CrdError::SourceUnavailable {
            source_name: self.describe(),
            reason,
        };

        let content = tokio::fs::read(&self.path)
            .await
            .map_err(|e| unavailable(e.to_string()))?;
        serde_json::from_slice(&content).map_err(|e| unavailable(e.to_string()))
    }
}

/// Pick a source for a location: `http://` and `https://` are fetched,
/// anything else is read as a file path
pub fn source_for(location: &str, client: HttpClient) -> Box<dyn DocumentSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(client, location))
    } else {
        Box::new(FileSource::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adviser_core::FetchOptions;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> HttpClient {
        HttpClient::public(FetchOptions::default()).unwrap()
    }

    #[tokio::test]
    async fn test_http_source_loads_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"openapi":"3.0.3"}"#))
            .mount(&server)
            .await;

        let source = HttpSource::new(client(), server.uri());
        let doc = source.load().await.unwrap();
        assert_eq!(doc["openapi"], "3.0.3");
    }

    #[tokio::test]
    async fn test_http_source_status_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let source = HttpSource::new(client(), server.uri());
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, CrdError::SourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openapi.json");
        std::fs::write(&path, r#"{"paths":{}}"#).unwrap();

        let doc = FileSource::new(&path).load().await.unwrap();
        assert_eq!(doc["paths"], serde_json::json!({}));

        std::fs::write(&path, "not json").unwrap();
        let err = FileSource::new(&path).load().await.unwrap_err();
        assert!(matches!(err, CrdError::SourceUnavailable { .. }));

        let err = FileSource::new(dir.path().join("missing.json"))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, CrdError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_source_for() {
        assert_eq!(
            source_for(CLOUDFLARE_OPENAPI_URL, client()).describe(),
            CLOUDFLARE_OPENAPI_URL
        );
        assert_eq!(
            source_for("./openapi.json", client()).describe(),
            "./openapi.json"
        );
    }
}
