//! Trip form validation.
//!
//! Every rule runs on every call so the caller can show all field errors at
//! once. Validation is a pure function of the form; no network state is
//! involved.

use chrono::NaiveDate;

use crate::dates::{format_api_date, parse_api_date};
use crate::types::{CreateTripRequest, TravelStyle, Trip};

pub const NAME_REQUIRED: &str = "Trip name is required";
pub const DESTINATION_REQUIRED: &str = "Please select a destination";
pub const DATES_REQUIRED: &str = "Please select start and end dates";
pub const END_BEFORE_START: &str = "End date must be after start date";
pub const TRAVEL_STYLE_REQUIRED: &str = "Please select a travel style";

/// Raw input from the create/edit trip form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripForm {
    pub name: String,
    pub destination: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub travel_style: Option<TravelStyle>,
    pub description: String,
    pub location: Option<String>,
}

/// Per-field error messages. The form is valid when every field is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub name: Option<String>,
    pub destination: Option<String>,
    pub dates: Option<String>,
    pub travel_style: Option<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.name.is_none()
            && self.destination.is_none()
            && self.dates.is_none()
            && self.travel_style.is_none()
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn check_dates(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<&'static str> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Some(END_BEFORE_START),
        (Some(_), Some(_)) => None,
        _ => Some(DATES_REQUIRED),
    }
}

pub fn validate(form: &TripForm) -> ValidationResult {
    ValidationResult {
        name: is_blank(&form.name).then(|| NAME_REQUIRED.to_string()),
        destination: is_blank(&form.destination).then(|| DESTINATION_REQUIRED.to_string()),
        dates: check_dates(form.start_date, form.end_date).map(str::to_string),
        travel_style: form
            .travel_style
            .is_none()
            .then(|| TRAVEL_STYLE_REQUIRED.to_string()),
    }
}

impl TripForm {
    /// Pre-fill the form for editing. Unparsable dates and unknown styles
    /// come back unset so validation asks for them again.
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            name: trip.name.clone(),
            destination: trip.destination.clone(),
            start_date: parse_api_date(&trip.start_date),
            end_date: parse_api_date(&trip.end_date),
            travel_style: trip.style(),
            description: trip.description.clone(),
            location: trip.location.clone(),
        }
    }

    pub fn validate(&self) -> ValidationResult {
        validate(self)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// Pull an end date that precedes the start date up to the start date.
    pub fn clamp_end_date(&mut self) {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                self.end_date = Some(start);
            }
        }
    }

    /// Build the API payload, or return the field errors. Name and
    /// destination are trimmed; the description is sent as entered.
    pub fn to_request(&self) -> Result<CreateTripRequest, ValidationResult> {
        let result = self.validate();
        match (self.start_date, self.end_date, self.travel_style) {
            (Some(start), Some(end), Some(style)) if result.is_valid() => Ok(CreateTripRequest {
                name: self.name.trim().to_string(),
                destination: self.destination.trim().to_string(),
                start_date: format_api_date(start),
                end_date: format_api_date(end),
                travel_style: style,
                description: self.description.clone(),
                location: self.location.clone(),
                image_url: None,
            }),
            _ => Err(result),
        }
    }
}
