//! Blocking HTTP transport backed by `ureq`.

use ureq::{Agent, RequestBuilder};

use crate::error::NetworkError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Executes requests over the network with a shared connection pool.
///
/// The agent has `http_status_as_error` disabled so 4xx/5xx responses come
/// back as data and `ApiClient` decides what they mean.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn prepare<B>(mut builder: RequestBuilder<B>, request: &HttpRequest) -> RequestBuilder<B> {
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
        .config()
        .timeout_global(Some(request.timeout))
        .build()
}

fn classify(err: ureq::Error) -> NetworkError {
    match err {
        ureq::Error::BadUri(_) => NetworkError::InvalidUrl,
        other => NetworkError::RequestFailed(other.to_string()),
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        let url = request.url.as_str();
        let outcome = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => prepare(self.agent.get(url), &request).call(),
            (HttpMethod::Delete, _) => prepare(self.agent.delete(url), &request).call(),
            (HttpMethod::Post, Some(body)) => {
                prepare(self.agent.post(url), &request).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => prepare(self.agent.post(url), &request).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                prepare(self.agent.put(url), &request).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => prepare(self.agent.put(url), &request).send_empty(),
        };
        let mut response = outcome.map_err(classify)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string().map_err(classify)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
