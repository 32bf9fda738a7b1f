use super::mocks::{MockLlmClient, StubExtractor};
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use bioscribe::{
    config::{Config, LlmConfig},
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;

pub const BOUNDARY: &str = "bioscribe-test-boundary";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.logs.level = "debug".to_string();
    config.llm = LlmConfig {
        api_key: Some("test-api-key".to_string()),
        ..LlmConfig::default()
    };
    config
}

pub fn create_test_app(llm: MockLlmClient, extractor: StubExtractor) -> Router {
    let config = create_test_config();
    server::router(
        AppState {
            llm: Arc::new(llm),
            extractor: Arc::new(extractor),
        },
        config.server.max_upload_bytes,
    )
}

/// Builds a `multipart/form-data` upload with a single part.
pub fn multipart_upload(uri: &str, field_name: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field_name}\"; filename=\"paper.pdf\"\r\nContent-Type: application/pdf\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
