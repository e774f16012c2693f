//! In-process fake of the trip backend.
//!
//! # Design
//! `InMemoryTransport` answers `/trips` requests from a locked `Vec<Trip>`
//! with the same statuses as the real API: 201 on create, 204 on delete,
//! 404 for unknown ids. Every executed request is recorded so tests can
//! assert how many round-trips an operation made. `fail_with` forces every
//! subsequent response to a fixed status until `recover` is called.
//! Item routes compare the raw (still percent-encoded) path segment with
//! each stored id encoded the same way the client encodes it.

use std::sync::{Mutex, MutexGuard, PoisonError};

use url::Url;
use uuid::Uuid;

use crate::error::NetworkError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{CreateTripRequest, Trip};

#[derive(Debug, Default)]
struct Backend {
    trips: Vec<Trip>,
    forced_status: Option<u16>,
    requests: Vec<HttpRequest>,
}

#[derive(Debug, Default)]
pub struct InMemoryTransport {
    backend: Mutex<Backend>,
}

enum Route<'a> {
    Collection,
    Item(&'a str),
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trips(trips: Vec<Trip>) -> Self {
        let transport = Self::default();
        transport.lock().trips = trips;
        transport
    }

    /// Answer every following request with `status` and an empty body.
    pub fn fail_with(&self, status: u16) {
        self.lock().forced_status = Some(status);
    }

    pub fn recover(&self) {
        self.lock().forced_status = None;
    }

    /// Requests executed so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().requests.clone()
    }

    /// Current contents of the store.
    pub fn trips(&self) -> Vec<Trip> {
        self.lock().trips.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Backend> {
        self.backend.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn route(url: &Url) -> Option<Route<'_>> {
    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [.., "trips"] => Some(Route::Collection),
        [.., "trips", id] => Some(Route::Item(*id)),
        _ => None,
    }
}

/// `id` as it appears in a request path after the client encodes it.
fn encoded_segment(id: &str) -> Option<String> {
    let mut url = Url::parse("http://segment.local/").ok()?;
    url.path_segments_mut().ok()?.push(id);
    url.path_segments()?.next_back().map(str::to_string)
}

fn matches_segment(trip: &Trip, segment: &str) -> bool {
    encoded_segment(&trip.id).as_deref() == Some(segment)
}

fn json<T: serde::Serialize>(status: u16, value: &T) -> HttpResponse {
    match serde_json::to_string(value) {
        Ok(body) => HttpResponse::new(status, body),
        Err(_) => HttpResponse::new(500, ""),
    }
}

fn decode_input(request: &HttpRequest) -> Option<CreateTripRequest> {
    serde_json::from_str(request.body.as_deref()?).ok()
}

fn apply(trip: &mut Trip, input: CreateTripRequest) {
    trip.name = input.name;
    trip.destination = input.destination;
    trip.start_date = input.start_date;
    trip.end_date = input.end_date;
    trip.travel_style = input.travel_style.label().to_string();
    trip.description = input.description;
    trip.location = input.location;
    trip.image_url = input.image_url;
}

impl Backend {
    fn handle(&mut self, request: &HttpRequest) -> HttpResponse {
        if let Some(status) = self.forced_status {
            return HttpResponse::new(status, "");
        }
        let Ok(url) = Url::parse(&request.url) else {
            return HttpResponse::new(400, "");
        };
        match (request.method, route(&url)) {
            (HttpMethod::Get, Some(Route::Collection)) => json(200, &self.trips),
            (HttpMethod::Post, Some(Route::Collection)) => {
                let Some(input) = decode_input(request) else {
                    return HttpResponse::new(400, "");
                };
                let mut trip = Trip {
                    id: Uuid::new_v4().to_string(),
                    name: String::new(),
                    destination: String::new(),
                    start_date: String::new(),
                    end_date: String::new(),
                    travel_style: String::new(),
                    description: String::new(),
                    image_url: None,
                    location: None,
                    price: None,
                };
                apply(&mut trip, input);
                self.trips.push(trip.clone());
                json(201, &trip)
            }
            (HttpMethod::Get, Some(Route::Item(id))) => {
                match self.trips.iter().find(|t| matches_segment(t, id)) {
                    Some(trip) => json(200, trip),
                    None => HttpResponse::new(404, ""),
                }
            }
            (HttpMethod::Put, Some(Route::Item(id))) => {
                let Some(input) = decode_input(request) else {
                    return HttpResponse::new(400, "");
                };
                match self.trips.iter_mut().find(|t| matches_segment(t, id)) {
                    Some(trip) => {
                        apply(trip, input);
                        json(200, &*trip)
                    }
                    None => HttpResponse::new(404, ""),
                }
            }
            (HttpMethod::Delete, Some(Route::Item(id))) => {
                let before = self.trips.len();
                self.trips.retain(|t| !matches_segment(t, id));
                if self.trips.len() < before {
                    HttpResponse::new(204, "")
                } else {
                    HttpResponse::new(404, "")
                }
            }
            (_, Some(_)) => HttpResponse::new(405, ""),
            (_, None) => HttpResponse::new(404, ""),
        }
    }
}

impl Transport for InMemoryTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        let mut backend = self.lock();
        let response = backend.handle(&request);
        backend.requests.push(request);
        Ok(response)
    }
}
