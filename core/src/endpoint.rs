//! Abstract description of one API call.

use serde::Serialize;
use serde_json::Value;

use crate::error::NetworkError;
use crate::http::HttpMethod;

/// Path, method, optional JSON body and query parameters for one call.
///
/// The body is encoded when the endpoint is constructed, so a payload that
/// cannot be serialized fails before anything touches the network.
/// `segments` are appended after `path`, each percent-encoded as a single
/// path segment, so caller-supplied ids cannot add or remove path levels.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub path: String,
    pub segments: Vec<String>,
    pub method: HttpMethod,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
}

impl Endpoint {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            segments: Vec::new(),
            method,
            body: None,
            query: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, NetworkError> {
        Self::new(HttpMethod::Post, path).with_body(body)
    }

    pub fn put<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, NetworkError> {
        Self::new(HttpMethod::Put, path).with_body(body)
    }

    pub fn with_body<B: Serialize>(mut self, body: &B) -> Result<Self, NetworkError> {
        let value = serde_json::to_value(body).map_err(|e| NetworkError::Encoding(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}
