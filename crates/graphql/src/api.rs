//! HTTP transport for a GraphQL endpoint.
//!
//! Sends `POST {endpoint}` with a `{"query": ...}` body using [`reqwest`]
//! and unwraps the standard `{"data": ..., "errors": [...]}` envelope.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use scene_editor_core::error::CoreError;

/// Maximum number of response body bytes kept in an error message.
const MAX_ERROR_BODY_LEN: usize = 200;

/// HTTP client for a single GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphqlApi {
    client: reqwest::Client,
    endpoint: String,
}

/// Errors from the GraphQL transport and response mapping.
#[derive(Debug, thiserror::Error)]
pub enum GraphqlError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("GraphQL endpoint error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Truncated response body.
        body: String,
    },

    /// The response carried a non-empty `errors` array.
    #[error("GraphQL error: {0}")]
    Query(String),

    /// A field the query asked for was missing or null.
    #[error("GraphQL response missing {0}")]
    MissingField(&'static str),

    /// Records were present but failed validation.
    #[error(transparent)]
    Invalid(#[from] CoreError),
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
}

impl GraphqlApi {
    /// Create a client for `endpoint`, e.g. `https://rickandmortyapi.com/graphql`.
    pub fn new(endpoint: String) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (carries timeouts and connection pooling).
    pub fn with_client(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run a query and decode its `data` member.
    pub async fn query<T: DeserializeOwned>(&self, query: &str) -> Result<T, GraphqlError> {
        let body = serde_json::json!({ "query": query });

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GraphqlError::ApiError {
                status: status.as_u16(),
                body: truncate(&text),
            });
        }

        let envelope = response.json::<Envelope<T>>().await?;
        unwrap_envelope(envelope)
    }
}

fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<T, GraphqlError> {
    if !envelope.errors.is_empty() {
        let messages: Vec<_> = envelope.errors.into_iter().map(|e| e.message).collect();
        return Err(GraphqlError::Query(messages.join("; ")));
    }
    envelope.data.ok_or(GraphqlError::MissingField("data"))
}

fn truncate(text: &str) -> String {
    match text.char_indices().nth(MAX_ERROR_BODY_LEN) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn parse(json: &str) -> Result<serde_json::Value, GraphqlError> {
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        unwrap_envelope(envelope)
    }

    #[test]
    fn data_is_returned() {
        let data = parse(r#"{"data":{"ok":true}}"#).unwrap();
        assert_eq!(data["ok"], true);
    }

    #[test]
    fn errors_are_joined() {
        let err = parse(r#"{"data":null,"errors":[{"message":"a"},{"message":"b"}]}"#);
        assert_matches!(err, Err(GraphqlError::Query(msg)) if msg == "a; b");
    }

    #[test]
    fn errors_win_over_partial_data() {
        let err = parse(r#"{"data":{"ok":true},"errors":[{"message":"partial"}]}"#);
        assert_matches!(err, Err(GraphqlError::Query(_)));
    }

    #[test]
    fn missing_data_is_an_error() {
        assert_matches!(parse(r#"{}"#), Err(GraphqlError::MissingField("data")));
    }

    #[test]
    fn truncate_keeps_short_bodies() {
        assert_eq!(truncate("bad gateway"), "bad gateway");
        let long = "x".repeat(MAX_ERROR_BODY_LEN + 10);
        assert_eq!(truncate(&long).len(), MAX_ERROR_BODY_LEN + 3);
    }
}
