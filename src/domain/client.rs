use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::types::{ClientId, ClientName, TypeConstraintError};

/// Inclusive window of instants during which a client accepts leads.
///
/// Both boundaries are UTC instants and are compared with the query time in
/// the same reference frame.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct WorkingHours {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl WorkingHours {
    /// Builds a window, rejecting a start that lies after the end.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TypeConstraintError> {
        if start > end {
            return Err(TypeConstraintError::InvertedWindow);
        }
        Ok(Self { start, end })
    }

    /// Returns `true` when `at` falls inside the window, boundaries included.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: ClientName,
    pub working_hours: WorkingHours,
    /// Higher values are preferred when routing leads.
    pub priority: i32,
    pub lead_count: u32,
    /// Maximum number of simultaneously assigned leads.
    pub capacity: u32,
}

impl Client {
    /// Share of the capacity already taken, as a real number.
    ///
    /// A zero-capacity client reads as fully loaded.
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            return 1.0;
        }
        f64::from(self.lead_count) / f64::from(self.capacity)
    }

    pub fn has_free_slot(&self) -> bool {
        self.lead_count < self.capacity
    }

    /// Whether the client accepts leads at `at`: non-zero capacity and inside
    /// its working hours.
    pub fn is_available_at(&self, at: DateTime<Utc>) -> bool {
        self.capacity > 0 && self.working_hours.contains(at)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewClient {
    pub id: ClientId,
    pub name: ClientName,
    pub working_hours: WorkingHours,
    pub priority: i32,
    pub lead_count: u32,
    pub capacity: u32,
}

impl NewClient {
    #[must_use]
    pub fn new(
        id: ClientId,
        name: ClientName,
        working_hours: WorkingHours,
        priority: i32,
        capacity: u32,
    ) -> Self {
        Self {
            id,
            name,
            working_hours,
            priority,
            lead_count: 0,
            capacity,
        }
    }

    /// Sets the number of leads the client already holds on registration.
    #[must_use]
    pub fn lead_count(mut self, lead_count: u32) -> Self {
        self.lead_count = lead_count;
        self
    }
}

impl From<NewClient> for Client {
    fn from(new_client: NewClient) -> Self {
        Self {
            id: new_client.id,
            name: new_client.name,
            working_hours: new_client.working_hours,
            priority: new_client.priority,
            lead_count: new_client.lead_count,
            capacity: new_client.capacity,
        }
    }
}
