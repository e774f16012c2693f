//! Full CRUD lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every `TripService`
//! operation over real HTTP through `UreqTransport`. Catches drift between
//! the core DTOs and the server's independently defined schema.

use std::time::Duration;

use trip_core::{
    ClientConfig, NetworkError, TravelStyle, TripForm, TripList, TripService, UreqTransport,
};

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn form(name: &str) -> TripForm {
    TripForm {
        name: name.to_string(),
        destination: "Nairobi, Kenya".to_string(),
        start_date: trip_core::dates::parse_api_date("2026-04-10"),
        end_date: trip_core::dates::parse_api_date("2026-04-15"),
        travel_style: Some(TravelStyle::Family),
        description: "Safari and city".to_string(),
        location: Some("Nairobi, Kenya".to_string()),
    }
}

#[test]
fn crud_lifecycle() {
    let base_url = start_server();
    let service = TripService::connect(
        ClientConfig::new(&base_url).with_timeout(Duration::from_secs(5)),
    );

    // Step 1: list — empty.
    let trips = service.list_trips().unwrap();
    assert!(trips.is_empty(), "expected empty list");

    // Step 2: create from a validated form.
    let request = form("Integration safari").to_request().unwrap();
    let created = service.create_trip(&request).unwrap();
    assert_eq!(created.name, "Integration safari");
    assert_eq!(created.style(), Some(TravelStyle::Family));
    assert_eq!(created.duration_display(), "5 Days");
    let id = created.id.clone();

    // Step 3: get.
    let fetched = service.get_trip(&id).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.location.as_deref(), Some("Nairobi, Kenya"));

    // Step 4: full-replace update.
    let mut edit = TripForm::from_trip(&fetched);
    edit.name = "Renamed safari".to_string();
    edit.travel_style = Some(TravelStyle::Group);
    edit.location = None;
    let updated = service.update_trip(&id, &edit.to_request().unwrap()).unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Renamed safari");
    assert_eq!(updated.travel_style, "Group");
    assert!(updated.location.is_none());

    // Step 5: list — one item, via the caller-side list.
    let mut list = TripList::new();
    list.refresh(&service).unwrap();
    assert_eq!(list.len(), 1);

    // Step 6: delete through the list.
    list.delete(&service, &id).unwrap();
    assert!(list.is_empty());

    // Step 7: get after delete — 404.
    let err = service.get_trip(&id).unwrap_err();
    assert_eq!(err, NetworkError::ServerError(404));

    // Step 8: delete again — 404.
    let err = service.delete_trip(&id).unwrap_err();
    assert_eq!(err, NetworkError::ServerError(404));

    // Step 9: list — empty again.
    let trips = service.list_trips().unwrap();
    assert!(trips.iter().all(|t| t.id != id), "deleted trip still listed");
}

#[test]
fn unreachable_server_is_request_failed() {
    // Bind then drop to get a port nothing listens on.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let service = TripService::connect(
        ClientConfig::new(&format!("http://{addr}")).with_timeout(Duration::from_secs(2)),
    );

    let err = service.list_trips().unwrap_err();
    assert!(matches!(err, NetworkError::RequestFailed(_)), "got {err:?}");
    assert!(err.is_retryable());
}

#[test]
fn ureq_transport_reports_status_as_data() {
    let base_url = start_server();
    let service = trip_core::TripService::new(trip_core::ApiClient::new(
        ClientConfig::new(&base_url),
        UreqTransport::default(),
    ));
    let err = service.get_trip("unknown").unwrap_err();
    assert_eq!(err.status_code(), Some(404));
}
