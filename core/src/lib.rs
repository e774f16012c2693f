//! Data, validation and network layer for the trip planner.
//!
//! # Overview
//! `TripService` maps the five trip operations onto `Endpoint`s, `ApiClient`
//! turns endpoints into `HttpRequest`s and responses into typed results, and
//! a `Transport` performs the round-trip in between. Form validation, date
//! helpers, the destination catalog and offline fallback data are pure and
//! need no network.
//!
//! # Design
//! - `ApiClient` holds only immutable config and its transport, so it can be
//!   shared across threads without locking.
//! - The build/parse halves of the client are public; tests drive them with
//!   recorded requests and responses.
//! - Every failure surfaces as a `NetworkError` whose `Display` is the
//!   user-facing message. Nothing retries or falls back on its own.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod cities;
pub mod client;
pub mod config;
pub mod dates;
pub mod endpoint;
pub mod error;
pub mod fallback;
pub mod http;
pub mod list;
pub mod service;
pub mod transport;
pub mod types;
pub mod validation;

pub use cities::City;
pub use client::ApiClient;
pub use config::{ClientConfig, ConfigError};
pub use endpoint::Endpoint;
pub use error::NetworkError;
pub use fallback::{backup_trips, sample_trip};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use list::TripList;
pub use service::TripService;
pub use transport::{InMemoryTransport, Transport, UreqTransport};
pub use types::{CreateTripRequest, TravelStyle, Trip};
pub use validation::{validate, TripForm, ValidationResult};
