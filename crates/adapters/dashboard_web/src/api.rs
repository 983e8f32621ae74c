//! HTTP status source wrapping `gloo-net`.

use gloo_net::http::Request;
use sleepy_app::ports::{StatusSource, decode_response};
use sleepy_domain::error::StatusError;
use sleepy_domain::snapshot::StatusSnapshot;

/// Fetches snapshots with a plain `GET` to a fixed endpoint.
pub struct HttpStatusSource {
    endpoint: String,
}

impl HttpStatusSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl StatusSource for HttpStatusSource {
    async fn fetch(&self) -> Result<StatusSnapshot, StatusError> {
        let resp = Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|err| StatusError::Network(err.to_string()))?;
        let body = resp
            .text()
            .await
            .map_err(|err| StatusError::Network(err.to_string()))?;
        decode_response(resp.status(), &body)
    }
}
