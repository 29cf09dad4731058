//! Lead assignment: snapshot the registry, pick a client, then commit.
//!
//! Selection works on copies taken under the read lock, so by the time the
//! lead is committed the chosen client may already be full. The commit step
//! re-validates capacity inside the registry and the race surfaces as
//! [`ServiceError::AssignmentFailed`] instead of being retried with another
//! candidate.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::client::Client;
use crate::repository::errors::RepositoryError;
use crate::repository::{ClientReader, ClientWriter};
use crate::services::availability::filter_available;
use crate::services::selection::select_best;
use crate::services::{ServiceError, ServiceResult};

/// Why no client could take the lead.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoneAvailableReason {
    /// The registry is empty.
    NoClients,
    /// Every client is outside its working hours or has zero capacity.
    NoneAcceptingLeads,
    /// Clients are accepting leads but all of them are full.
    AllAtCapacity,
}

/// Outcome of a lead assignment that did not hit a race or internal error.
#[derive(Clone, Debug, PartialEq)]
pub enum LeadAssignment {
    /// The lead was committed; holds the client state after the increment.
    Assigned(Client),
    NoneAvailable(NoneAvailableReason),
}

/// Assigns one lead to the best client available at `now`.
pub fn assign_lead<R>(repo: &R, now: DateTime<Utc>) -> ServiceResult<LeadAssignment>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let clients = repo.list_clients()?;
    if clients.is_empty() {
        return Ok(LeadAssignment::NoneAvailable(NoneAvailableReason::NoClients));
    }

    let available = filter_available(clients, now);
    if available.is_empty() {
        log::info!("No client accepts leads at {now}");
        return Ok(LeadAssignment::NoneAvailable(
            NoneAvailableReason::NoneAcceptingLeads,
        ));
    }

    let Some(chosen) = select_best(&available) else {
        log::info!("All available clients are at capacity");
        return Ok(LeadAssignment::NoneAvailable(
            NoneAvailableReason::AllAtCapacity,
        ));
    };

    match repo.increment_lead_count(&chosen.id) {
        Ok(updated) => {
            log::info!(
                "Lead assigned to client {} ({}/{})",
                updated.id,
                updated.lead_count,
                updated.capacity
            );
            Ok(LeadAssignment::Assigned(updated))
        }
        Err(RepositoryError::CapacityExceeded(_)) | Err(RepositoryError::NotFound) => {
            log::warn!(
                "Client {} changed between selection and commit",
                chosen.id
            );
            Err(ServiceError::AssignmentFailed(chosen.id.to_string()))
        }
        Err(err) => {
            log::error!("Failed to assign lead to client {}: {err}", chosen.id);
            Err(err.into())
        }
    }
}
