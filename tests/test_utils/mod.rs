//! Test utilities for integration tests
use std::sync::Arc;

use axum::{Router, body::Body};

use campusbot::ai::TokenCounter;
use campusbot::api::AppState;
use campusbot::api::app;
use campusbot::core::AppConfig;

/// Creates a test application router whose search index and chat
/// deployment both live at `upstream_url`, usually a `mockito`
/// server.
pub fn test_app(upstream_url: &str) -> Router {
    let app_config = AppConfig {
        search_endpoint: upstream_url.to_string(),
        search_index_name: String::from("school"),
        search_api_key: String::from("test-search-key"),
        search_api_version: String::from("2021-04-30-Preview"),
        openai_endpoint: upstream_url.to_string(),
        openai_api_key: String::from("test-openai-key"),
        openai_api_version: String::from("2024-02-01"),
        openai_deployment: String::from("gpt-35-turbo"),
        system_message: String::from("You are a helpful assistant."),
        max_tokens: 8192,
    };
    let counter = TokenCounter::new().expect("Failed to load tokenizer");
    let app_state = AppState::new(app_config, counter);
    app(Arc::new(app_state))
}

#[allow(dead_code)]
pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}
