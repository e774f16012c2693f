//! Executors for `HttpRequest` values.
//!
//! `ApiClient` is generic over `Transport`, so the same client code runs
//! against real HTTP (`UreqTransport`) or an in-process fake backend
//! (`InMemoryTransport`).

mod memory;
mod live;

use std::sync::Arc;

use crate::error::NetworkError;
use crate::http::{HttpRequest, HttpResponse};

pub use self::memory::InMemoryTransport;
pub use self::live::UreqTransport;

/// Executes one HTTP round-trip.
///
/// Implementations return `Ok` for every response that arrived, whatever its
/// status; status classification belongs to `ApiClient`. `Err` is reserved
/// for failures where no response exists.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        (**self).execute(request)
    }
}
