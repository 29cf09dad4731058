use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::domain::client::{NewClient, WorkingHours};
use crate::domain::types::{ClientId, ClientName, TypeConstraintError};
use crate::forms::FormError;

/// Naive date-time layouts accepted after RFC 3339; interpreted as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];
const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S";

/// Parses a working-hours boundary into a UTC instant.
///
/// Tries RFC 3339 first, then naive date-times, then a bare time of day which
/// is placed on `today`.
pub fn parse_timestamp(raw: &str, today: NaiveDate) -> Result<DateTime<Utc>, TypeConstraintError> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed.and_utc());
        }
    }

    if let Ok(time) = NaiveTime::parse_from_str(raw, TIME_OF_DAY_FORMAT) {
        return Ok(today.and_time(time).and_utc());
    }

    Err(TypeConstraintError::InvalidTimestamp(raw.to_string()))
}

#[derive(Debug, Deserialize, Validate)]
/// Working-hours boundaries as submitted by the caller.
pub struct WorkingHoursForm {
    #[validate(length(min = 1))]
    pub start: String,
    #[validate(length(min = 1))]
    pub end: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// JSON body for registering a new client.
pub struct AddClientForm {
    /// Externally assigned identifier; required even though the field may be
    /// omitted from the body.
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(nested)]
    pub working_hours: WorkingHoursForm,
    #[serde(default)]
    pub priority: i32,
    /// Leads the client already holds when registered.
    #[serde(default)]
    pub lead_count: u32,
    pub capacity: u32,
}

impl AddClientForm {
    /// Converts the form into a domain [`NewClient`].
    pub fn to_new_client(&self, today: NaiveDate) -> Result<NewClient, FormError> {
        let id = self
            .id
            .as_deref()
            .ok_or(FormError::InvalidClientId)
            .and_then(|id| ClientId::new(id).map_err(|_| FormError::InvalidClientId))?;
        let name = ClientName::new(self.name.as_str()).map_err(|_| FormError::InvalidName)?;

        let start = parse_timestamp(&self.working_hours.start, today)?;
        let end = parse_timestamp(&self.working_hours.end, today)?;
        let working_hours = WorkingHours::new(start, end)?;

        if self.lead_count > self.capacity {
            return Err(FormError::LeadCountAboveCapacity);
        }

        Ok(
            NewClient::new(id, name, working_hours, self.priority, self.capacity)
                .lead_count(self.lead_count),
        )
    }
}
