//! Request builder and response parser for the trip API.
//!
//! # Design
//! `ApiClient` holds an immutable `ClientConfig` and a `Transport`. Each call
//! is split into `build_request` (endpoint to `HttpRequest`) and
//! `parse_response` / `parse_empty` (`HttpResponse` to typed result), with the
//! transport executing the round-trip in between. The split halves are public
//! so they can be exercised against recorded requests and responses without
//! any transport at all.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::NetworkError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

const JSON: &str = "application/json";

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    config: ClientConfig,
    transport: T,
}

impl<T> ApiClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve `endpoint` against the base URL and attach JSON headers, the
    /// encoded body, and the configured timeout.
    pub fn build_request(&self, endpoint: &Endpoint) -> Result<HttpRequest, NetworkError> {
        if !endpoint.path.starts_with('/') {
            return Err(NetworkError::InvalidUrl);
        }
        let mut url = Url::parse(&format!("{}{}", self.config.base_url(), endpoint.path))
            .map_err(|_| NetworkError::InvalidUrl)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(NetworkError::InvalidUrl);
        }
        if !endpoint.segments.is_empty() {
            // "." and ".." are dot-segments in every URL; empty would name the collection.
            if endpoint
                .segments
                .iter()
                .any(|s| matches!(s.as_str(), "" | "." | ".."))
            {
                return Err(NetworkError::InvalidUrl);
            }
            url.path_segments_mut()
                .map_err(|()| NetworkError::InvalidUrl)?
                .extend(endpoint.segments.iter());
        }
        if !endpoint.query.is_empty() {
            url.query_pairs_mut().extend_pairs(endpoint.query.iter());
        }

        let body = endpoint
            .body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| NetworkError::Encoding(e.to_string()))?;

        Ok(HttpRequest {
            method: endpoint.method,
            url: url.into(),
            headers: vec![
                ("Content-Type".to_string(), JSON.to_string()),
                ("Accept".to_string(), JSON.to_string()),
            ],
            body,
            timeout: self.config.timeout(),
        })
    }

    /// Decode a 2xx body into `R`. A body that is empty or does not match
    /// the expected shape is a `Decoding` error.
    pub fn parse_response<R: DeserializeOwned>(&self, response: HttpResponse) -> Result<R, NetworkError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| NetworkError::Decoding(e.to_string()))
    }

    /// Accept any 2xx response and discard its body.
    pub fn parse_empty(&self, response: HttpResponse) -> Result<(), NetworkError> {
        check_status(&response)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn request<R: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<R, NetworkError> {
        let response = self.send(endpoint)?;
        self.parse_response(response).inspect_err(|err| {
            warn!(method = %endpoint.method, path = %endpoint.path, error = ?err, "response rejected");
        })
    }

    pub fn request_void(&self, endpoint: &Endpoint) -> Result<(), NetworkError> {
        let response = self.send(endpoint)?;
        self.parse_empty(response).inspect_err(|err| {
            warn!(method = %endpoint.method, path = %endpoint.path, error = ?err, "response rejected");
        })
    }

    fn send(&self, endpoint: &Endpoint) -> Result<HttpResponse, NetworkError> {
        let request = self.build_request(endpoint)?;
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(request).inspect_err(|err| {
            warn!(method = %endpoint.method, path = %endpoint.path, error = %err, "transport failed");
        })?;
        debug!(status = response.status, bytes = response.body.len(), "received response");
        Ok(response)
    }
}

/// Map a status outside 200..=299 to `ServerError`.
fn check_status(response: &HttpResponse) -> Result<(), NetworkError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(NetworkError::ServerError(response.status))
    }
}
