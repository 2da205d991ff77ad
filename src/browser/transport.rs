use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TransportError {
    /// Connect, DNS, TLS or timeout failure before a response arrived.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response started but its body could not be read.
    #[error("could not read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not the JSON object the endpoint promises.
    #[error("malformed response body (HTTP {status}): {source}")]
    MalformedBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Raw answer from the server; interpretation happens in the form layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One JSON POST per call. No retries.
pub trait Transport {
    fn post_json(&self, endpoint: &str, payload: &Value) -> Result<HttpReply, TransportError>;
}

/// Blocking reqwest client rooted at the application's base URL.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpTransport {
    /// Uses reqwest's default timeout.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(TransportError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, endpoint: &str, payload: &Value) -> Result<HttpReply, TransportError> {
        let url = self.url_for(endpoint);
        debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .map_err(|source| TransportError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|source| TransportError::Body { url, source })?;

        Ok(HttpReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_joins_without_doubling_slashes() {
        let t = HttpTransport::new("http://localhost:5000/").unwrap();
        assert_eq!(t.url_for("/login"), "http://localhost:5000/login");
        assert_eq!(t.url_for("register"), "http://localhost:5000/register");
        assert_eq!(t.url_for("https://auth.example/login"), "https://auth.example/login");
    }

    #[test]
    fn only_2xx_counts_as_success() {
        assert!(HttpReply::new(200, "").is_success());
        assert!(HttpReply::new(204, "").is_success());
        assert!(!HttpReply::new(401, "").is_success());
        assert!(!HttpReply::new(302, "").is_success());
    }
}
