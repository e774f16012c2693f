//! Static trips for offline display.
//!
//! Nothing in this crate falls back automatically; a caller that gets a
//! `NetworkError` from `TripService` may choose to show `backup_trips()`.

use crate::types::Trip;

// (id, name, destination, start, end, style, description, image)
const BACKUP_TRIPS: [(&str, &str, &str, &str, &str, &str, &str, &str); 10] = [
    (
        "1",
        "Paris Getaway",
        "Paris, France",
        "2025-05-10",
        "2025-05-17",
        "Couple",
        "Romantic week exploring Paris cafes and landmarks.",
        "https://images.unsplash.com/photo-1502602898657-3e91760cbb34",
    ),
    (
        "2",
        "Dubai Adventure",
        "Dubai, UAE",
        "2025-06-02",
        "2025-06-09",
        "Solo",
        "Luxury shopping, desert safari, and city exploration.",
        "https://images.unsplash.com/photo-1512453979798-5ea266f8880c",
    ),
    (
        "3",
        "New York Business Trip",
        "New York, USA",
        "2025-07-15",
        "2025-07-20",
        "Business",
        "Meetings, networking, and quick sightseeing.",
        "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9",
    ),
    (
        "4",
        "Bali Retreat",
        "Bali, Indonesia",
        "2025-08-01",
        "2025-08-12",
        "Family",
        "Relaxation, beaches, temples, and cultural tours.",
        "https://images.unsplash.com/photo-1537996194471-e657df975ab4",
    ),
    (
        "5",
        "Tokyo Exploration",
        "Tokyo, Japan",
        "2025-09-05",
        "2025-09-14",
        "Solo",
        "Tech culture, sushi spots, and city nightlife.",
        "https://images.unsplash.com/photo-1503899036084-c55cdd92da26",
    ),
    (
        "6",
        "Cape Town Escape",
        "Cape Town, South Africa",
        "2025-10-10",
        "2025-10-18",
        "Couple",
        "Table Mountain, beaches, and wine tasting.",
        "https://images.unsplash.com/photo-1518546305927-5a555bb7020d",
    ),
    (
        "7",
        "London Cultural Tour",
        "London, UK",
        "2025-11-03",
        "2025-11-10",
        "Family",
        "Museums, theatre shows, and historic sites.",
        "https://images.unsplash.com/photo-1513635269975-59663e0ac1ad",
    ),
    (
        "8",
        "Sydney Summer Trip",
        "Sydney, Australia",
        "2025-12-05",
        "2025-12-15",
        "Group",
        "Beach fun, city tours, and nightlife.",
        "https://images.unsplash.com/photo-1506973035872-a4ec16b8e8d9",
    ),
    (
        "9",
        "Rome History Tour",
        "Rome, Italy",
        "2026-01-12",
        "2026-01-20",
        "Couple",
        "Ancient ruins, Vatican tours, and Italian cuisine.",
        "https://images.unsplash.com/photo-1529156069898-49953e39b3ac",
    ),
    (
        "10",
        "Lagos Staycation",
        "Lagos, Nigeria",
        "2026-02-08",
        "2026-02-14",
        "Solo",
        "Local relaxation, beaches, and city experiences.",
        "https://images.unsplash.com/photo-1576485290814-1c72aa4bbb8e",
    ),
];

/// The offline trip list, ids "1" through "10".
pub fn backup_trips() -> Vec<Trip> {
    BACKUP_TRIPS
        .iter()
        .map(|&(id, name, destination, start, end, style, description, image)| Trip {
            id: id.to_string(),
            name: name.to_string(),
            destination: destination.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            travel_style: style.to_string(),
            description: description.to_string(),
            image_url: Some(image.to_string()),
            location: None,
            price: None,
        })
        .collect()
}

/// A single fully populated trip for previews and tests.
pub fn sample_trip() -> Trip {
    Trip {
        id: "preview-1".to_string(),
        name: "Bahamas Family Trip".to_string(),
        destination: "Lagos, Nigeria".to_string(),
        start_date: "2024-03-21".to_string(),
        end_date: "2024-04-21".to_string(),
        travel_style: "Solo".to_string(),
        description: "A wonderful family vacation to the Bahamas".to_string(),
        image_url: None,
        location: Some("New York, United States of America".to_string()),
        price: Some(123_450.00),
    }
}
