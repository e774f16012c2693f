//! Trip operations expressed as endpoints.
//!
//! Each method issues exactly one request through `ApiClient` and returns its
//! outcome unchanged: no retries, no caching, no fallback data. Callers that
//! want any of those wrap the service.

use tracing::info;

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::NetworkError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{CreateTripRequest, Trip};

const TRIPS: &str = "/trips";

#[derive(Debug, Clone)]
pub struct TripService<T> {
    client: ApiClient<T>,
}

impl TripService<UreqTransport> {
    /// Service talking to the real API over HTTP.
    pub fn connect(config: ClientConfig) -> Self {
        Self::new(ApiClient::new(config, UreqTransport::new()))
    }
}

impl<T: Transport> TripService<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    pub fn list_trips(&self) -> Result<Vec<Trip>, NetworkError> {
        let trips: Vec<Trip> = self.client.request(&Endpoint::get(TRIPS))?;
        info!(count = trips.len(), "fetched trips");
        Ok(trips)
    }

    pub fn get_trip(&self, id: &str) -> Result<Trip, NetworkError> {
        self.client.request(&Endpoint::get(TRIPS).with_segment(id))
    }

    pub fn create_trip(&self, request: &CreateTripRequest) -> Result<Trip, NetworkError> {
        let trip: Trip = self.client.request(&Endpoint::post(TRIPS, request)?)?;
        info!(id = %trip.id, "created trip");
        Ok(trip)
    }

    /// Replace every field of trip `id` with `request`.
    pub fn update_trip(&self, id: &str, request: &CreateTripRequest) -> Result<Trip, NetworkError> {
        let trip: Trip = self.client.request(&Endpoint::put(TRIPS, request)?.with_segment(id))?;
        info!(id = %trip.id, "updated trip");
        Ok(trip)
    }

    pub fn delete_trip(&self, id: &str) -> Result<(), NetworkError> {
        self.client.request_void(&Endpoint::delete(TRIPS).with_segment(id))?;
        info!(id, "deleted trip");
        Ok(())
    }
}
