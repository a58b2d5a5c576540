use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::models::Envelope;

/// API error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    #[error("Server rejected request: {0}")]
    Rejected(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Deserialization(err.to_string())
    }
}

/// API client for the air-conditioning backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given server address
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request with query parameters and unwrap the response envelope
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .query(query.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: gloo_net::http::Response,
    ) -> Result<Option<T>, ApiError> {
        let status = response.status();

        if !response.ok() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Http { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;

        let envelope = decode_envelope(&body)?;
        envelope_result(envelope)
    }
}

/// Parse a response body into an envelope.
///
/// The backend serializes the envelope to a string before wrapping it in a JSON
/// response, so the body may be a JSON string holding the envelope.
pub fn decode_envelope(body: &str) -> Result<Envelope, ApiError> {
    match serde_json::from_str::<Value>(body)? {
        Value::String(inner) => Ok(serde_json::from_str(&inner)?),
        value => Ok(serde_json::from_value(value)?),
    }
}

/// Turn an envelope into its typed result, failing on a non-OK message
pub fn envelope_result<T: DeserializeOwned>(envelope: Envelope) -> Result<Option<T>, ApiError> {
    if !envelope.is_ok() {
        return Err(ApiError::Rejected(envelope.message));
    }

    match envelope.result {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
    }
}
