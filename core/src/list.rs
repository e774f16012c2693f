//! The caller-side list of trips kept in sync with service results.

use crate::error::NetworkError;
use crate::service::TripService;
use crate::transport::Transport;
use crate::types::Trip;

/// Trips in display order, newest first after `insert_front`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripList {
    trips: Vec<Trip>,
}

impl TripList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, trips: Vec<Trip>) {
        self.trips = trips;
    }

    pub fn insert_front(&mut self, trip: Trip) {
        self.trips.insert(0, trip);
    }

    /// Replace the entry sharing `trip`'s id. Returns false if none did.
    pub fn update(&mut self, trip: Trip) -> bool {
        match self.trips.iter_mut().find(|t| t.id == trip.id) {
            Some(slot) => {
                *slot = trip;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Trip> {
        let index = self.trips.iter().position(|t| t.id == id)?;
        Some(self.trips.remove(index))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.trips.iter().any(|t| t.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trip> {
        self.trips.iter()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Reload from the service. On error the current contents are kept.
    pub fn refresh<T: Transport>(&mut self, service: &TripService<T>) -> Result<(), NetworkError> {
        self.trips = service.list_trips()?;
        Ok(())
    }

    /// Delete through the service, then drop the trip locally.
    pub fn delete<T: Transport>(&mut self, service: &TripService<T>, id: &str) -> Result<(), NetworkError> {
        service.delete_trip(id)?;
        self.remove(id);
        Ok(())
    }
}

impl From<Vec<Trip>> for TripList {
    fn from(trips: Vec<Trip>) -> Self {
        Self { trips }
    }
}

impl IntoIterator for TripList {
    type Item = Trip;
    type IntoIter = std::vec::IntoIter<Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.into_iter()
    }
}
