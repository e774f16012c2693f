//! Domain DTOs for the trip API.
//!
//! # Design
//! Rust field names are snake_case; `#[serde(rename)]` pins the wire names
//! the backend expects (`tripName`, `imageUrl`, camelCase dates). `Trip`
//! keeps `travel_style` as the raw wire string so an unknown style from the
//! server does not fail the whole list; `CreateTripRequest` only ever holds a
//! validated `TravelStyle`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dates;

/// Composition of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelStyle {
    Solo,
    Couple,
    Family,
    Group,
    Business,
}

impl TravelStyle {
    pub const ALL: [TravelStyle; 5] = [
        TravelStyle::Solo,
        TravelStyle::Couple,
        TravelStyle::Family,
        TravelStyle::Group,
        TravelStyle::Business,
    ];

    /// Display label, also the wire value.
    pub fn label(self) -> &'static str {
        match self {
            TravelStyle::Solo => "Solo",
            TravelStyle::Couple => "Couple",
            TravelStyle::Family => "Family",
            TravelStyle::Group => "Group",
            TravelStyle::Business => "Business",
        }
    }

    /// Symbol name for the style's icon.
    pub fn icon(self) -> &'static str {
        match self {
            TravelStyle::Solo => "person.fill",
            TravelStyle::Couple => "person.2.fill",
            TravelStyle::Family => "figure.2.and.child.holdinghands",
            TravelStyle::Group => "person.3.fill",
            TravelStyle::Business => "briefcase.fill",
        }
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown travel style: {0}")]
pub struct UnknownTravelStyle(pub String);

impl FromStr for TravelStyle {
    type Err = UnknownTravelStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TravelStyle::ALL
            .into_iter()
            .find(|style| style.label() == s)
            .ok_or_else(|| UnknownTravelStyle(s.to_string()))
    }
}

/// A planned trip as returned by the API.
///
/// Equality and hashing consider only `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
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

impl PartialEq for Trip {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Trip {}

impl Hash for Trip {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Trip {
    /// Parsed travel style, `None` for labels this client does not know.
    pub fn style(&self) -> Option<TravelStyle> {
        self.travel_style.parse().ok()
    }

    pub fn date_range_display(&self) -> String {
        dates::display_date_range(&self.start_date, &self.end_date)
    }

    pub fn duration_display(&self) -> String {
        dates::display_duration(&self.start_date, &self.end_date)
    }

    pub fn formatted_start_date(&self) -> String {
        match dates::parse_api_date(&self.start_date) {
            Some(date) => dates::format_ordinal_date(date),
            None => self.start_date.clone(),
        }
    }

    /// "<location or destination> | <style> Trip"
    pub fn location_display(&self) -> String {
        let place = match self.location.as_deref() {
            Some(location) if !location.is_empty() => location,
            _ => &self.destination,
        };
        format!("{place} | {} Trip", self.travel_style)
    }
}

/// Request payload for creating a trip or fully replacing an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTripRequest {
    #[serde(rename = "tripName")]
    pub name: String,
    pub destination: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    #[serde(rename = "travelStyle")]
    pub travel_style: TravelStyle,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
