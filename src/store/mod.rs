//! Content store client
//!
//! Issues read-only queries against the headless content store over HTTP.
//! Failures are surfaced to the caller; there is no retry or fallback here.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::config::StoreConfig;
use crate::content::{query::encode_query, PostDocument, QueryRef};

/// Errors surfaced by the content store client
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The request never completed (connect failure, timeout, ...)
    #[error("content store request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-success status
    #[error("content store returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The store answered with a body we could not decode
    #[error("malformed content store response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Result type for content store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Query response envelope returned by the store
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    #[serde(default)]
    result: Option<T>,
}

/// Read-only client for the content store's query endpoint
pub struct ContentStore {
    client: Client,
    query_endpoint: String,
    token: Option<String>,
}

impl ContentStore {
    /// Create a new client from store configuration
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            query_endpoint: config.query_endpoint(),
            token: config.token.clone(),
        })
    }

    /// All post documents, in store order
    pub async fn fetch_posts(&self) -> Result<Vec<PostDocument>> {
        self.fetch(QueryRef::ALL_POSTS).await
    }

    /// Execute a named query and decode the result collection.
    ///
    /// An empty or absent result is a valid empty collection, not an error.
    pub async fn fetch<T>(&self, query: QueryRef) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        tracing::debug!("executing query {} against content store", query);
        let body = self.execute(&query.encoded()).await?;
        let envelope: QueryResponse<T> = serde_json::from_str(&body).map_err(StoreError::Decode)?;
        Ok(envelope.result.unwrap_or_default())
    }

    /// Execute raw query text and return the undecoded result
    pub async fn query_raw(&self, text: &str) -> Result<serde_json::Value> {
        let body = self.execute(&encode_query(text)).await?;
        let envelope: QueryResponse<serde_json::Value> =
            serde_json::from_str(&body).map_err(StoreError::Decode)?;
        Ok(envelope.result.unwrap_or(serde_json::Value::Null))
    }

    /// Probe the store with a trivial query
    pub async fn ping(&self) -> Result<()> {
        self.query_raw("true").await.map(|_| ())
    }

    /// One GET against the query endpoint, returning the response body
    async fn execute(&self, encoded_query: &str) -> Result<String> {
        let url = format!("{}?query={}", self.query_endpoint, encoded_query);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Status { status, body });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_envelope() {
        let body = r#"{
            "query": "*[_type == \"post\"]",
            "result": [
                {"_id": "1", "title": "A"},
                {"_id": "2", "title": "B"}
            ],
            "ms": 3
        }"#;

        let envelope: QueryResponse<Vec<PostDocument>> = serde_json::from_str(body).unwrap();
        let posts = envelope.result.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "A");
        assert_eq!(posts[1].title, "B");
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let body = r#"{"result": [], "ms": 1}"#;
        let envelope: QueryResponse<Vec<PostDocument>> = serde_json::from_str(body).unwrap();
        assert!(envelope.result.unwrap().is_empty());
    }

    #[test]
    fn test_absent_result_decodes_as_none() {
        let body = r#"{"ms": 1}"#;
        let envelope: QueryResponse<Vec<PostDocument>> = serde_json::from_str(body).unwrap();
        assert!(envelope.result.is_none());
    }

    #[test]
    fn test_status_error_display() {
        let err = StoreError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: "upstream down".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("upstream down"));
    }
}
