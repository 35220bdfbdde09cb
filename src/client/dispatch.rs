//! Sends captured user text to the query endpoint and turns the
//! outcome into a bot message. Every failure is recovered locally:
//! the user only ever sees `FALLBACK_MESSAGE` and the details go to
//! the tracing output.

use async_trait::async_trait;
use reqwest::StatusCode;

use super::message::Message;
use crate::api::public::query::{QueryRequest, QueryResponse};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/query";

pub const FALLBACK_MESSAGE: &str = "Sorry, something went wrong.";

#[derive(Debug, thiserror::Error)]
pub enum RequestFailed {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("server responded with status {0}")]
    Status(StatusCode),
    #[error("reply is not a valid query response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Anything that can answer a query. The chat session only talks to
/// this trait so it can run without a server.
#[async_trait]
pub trait QueryBackend: Send + Sync {
    async fn query(&self, text: &str) -> Result<String, RequestFailed>;
}

#[derive(Clone, Debug)]
pub struct QueryClient {
    endpoint: String,
    http: reqwest::Client,
}

impl QueryClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl QueryBackend for QueryClient {
    async fn query(&self, text: &str) -> Result<String, RequestFailed> {
        let transport = |source| RequestFailed::Transport {
            url: self.endpoint.clone(),
            source,
        };

        // No timeout is set so the transport default applies
        let resp = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&QueryRequest::new(text))
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RequestFailed::Status(status));
        }

        // Decode by hand so a body without `response` is an error
        // rather than an empty reply
        let body = resp.text().await.map_err(transport)?;
        let reply: QueryResponse = serde_json::from_str(&body)?;

        Ok(reply.response)
    }
}

/// Resolve the bot's reply to `text`. Never fails, errors become the
/// fallback message.
pub async fn reply_for(backend: &dyn QueryBackend, text: &str) -> Message {
    match backend.query(text).await {
        Ok(response) => Message::bot(&response),
        Err(err) => {
            tracing::error!("Query failed: {}", err);
            Message::bot(FALLBACK_MESSAGE)
        }
    }
}
