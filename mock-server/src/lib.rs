use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    #[serde(rename = "tripName")]
    pub name: String,
    pub destination: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    #[serde(rename = "travelStyle")]
    pub travel_style: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Body of POST and PUT. PUT replaces every field except `id` and `price`.
#[derive(Deserialize)]
pub struct TripInput {
    #[serde(rename = "tripName")]
    pub name: String,
    pub destination: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    #[serde(rename = "travelStyle")]
    pub travel_style: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub location: Option<String>,
}

impl TripInput {
    fn apply(self, trip: &mut Trip) {
        trip.name = self.name;
        trip.destination = self.destination;
        trip.start_date = self.start_date;
        trip.end_date = self.end_date;
        trip.travel_style = self.travel_style;
        trip.description = self.description;
        trip.image_url = self.image_url;
        trip.location = self.location;
    }
}

/// Trips in insertion order.
pub type Db = Arc<RwLock<Vec<Trip>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(trips: Vec<Trip>) -> Router {
    let db: Db = Arc::new(RwLock::new(trips));
    Router::new()
        .route("/trips", get(list_trips).post(create_trip))
        .route("/trips/{id}", get(get_trip).put(update_trip).delete(delete_trip))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, Vec::new()).await
}

pub async fn serve(listener: TcpListener, trips: Vec<Trip>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(trips)).await
}

/// A handful of trips for local development.
///
/// Kept separate from the client crate's offline trips: the server owns its
/// own schema so integration tests catch drift between the two, and seeds
/// only the required fields.
pub fn sample_trips() -> Vec<Trip> {
    [
        ("1", "Paris Getaway", "Paris, France", "2025-05-10", "2025-05-17", "Couple"),
        ("2", "Dubai Adventure", "Dubai, UAE", "2025-06-02", "2025-06-09", "Solo"),
        ("3", "New York Business Trip", "New York, USA", "2025-07-15", "2025-07-20", "Business"),
    ]
    .into_iter()
    .map(|(id, name, destination, start, end, style)| Trip {
        id: id.to_string(),
        name: name.to_string(),
        destination: destination.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        travel_style: style.to_string(),
        description: String::new(),
        image_url: None,
        location: None,
        price: None,
    })
    .collect()
}

async fn list_trips(State(db): State<Db>) -> Json<Vec<Trip>> {
    Json(db.read().await.clone())
}

async fn create_trip(
    State(db): State<Db>,
    Json(input): Json<TripInput>,
) -> (StatusCode, Json<Trip>) {
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
    input.apply(&mut trip);
    info!(id = %trip.id, "trip created");
    db.write().await.push(trip.clone());
    (StatusCode::CREATED, Json(trip))
}

async fn get_trip(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Trip>, StatusCode> {
    let trips = db.read().await;
    trips
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_trip(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<TripInput>,
) -> Result<Json<Trip>, StatusCode> {
    let mut trips = db.write().await;
    let trip = trips
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    input.apply(trip);
    info!(%id, "trip updated");
    Ok(Json(trip.clone()))
}

async fn delete_trip(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut trips = db.write().await;
    let index = trips
        .iter()
        .position(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    trips.remove(index);
    info!(%id, "trip deleted");
    Ok(StatusCode::NO_CONTENT)
}
