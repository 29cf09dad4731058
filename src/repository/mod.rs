//! Client registry contracts and the in-memory implementation backing them.
//!
//! Services depend on [`ClientReader`] and [`ClientWriter`] only, so the
//! backing store can be swapped without touching the routing logic.

use crate::domain::client::{Client, NewClient};
use crate::domain::types::ClientId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod in_memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use in_memory::InMemoryRepository;

pub trait ClientReader {
    /// Returns an independent copy of the client, if registered.
    fn get_client_by_id(&self, id: &ClientId) -> RepositoryResult<Option<Client>>;
    /// Returns independent copies of every client in unspecified order.
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
}

pub trait ClientWriter {
    /// Registers a client, failing with `AlreadyExists` on a taken id.
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    /// Re-validates capacity and adds exactly one lead, returning the updated
    /// copy. Fails with `CapacityExceeded` when the client is full.
    fn increment_lead_count(&self, id: &ClientId) -> RepositoryResult<Client>;
}
