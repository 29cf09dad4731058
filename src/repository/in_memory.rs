//! Process-local client registry guarded by a reader-writer lock.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, RwLock};

use crate::domain::client::{Client, NewClient};
use crate::domain::types::ClientId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientReader, ClientWriter};

/// In-memory implementation of the client registry.
///
/// Cloning is cheap and every clone shares the same records, so one instance
/// is built at startup and handed to each consumer. Reads take the shared
/// lock; `create_client` and `increment_lead_count` take the exclusive lock
/// for their whole check-then-mutate step.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    clients: Arc<RwLock<HashMap<ClientId, Client>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClientReader for InMemoryRepository {
    fn get_client_by_id(&self, id: &ClientId) -> RepositoryResult<Option<Client>> {
        let clients = self.clients.read()?;
        Ok(clients.get(id).cloned())
    }

    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        let clients = self.clients.read()?;
        Ok(clients.values().cloned().collect())
    }
}

impl ClientWriter for InMemoryRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        let mut clients = self.clients.write()?;

        match clients.entry(new_client.id.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::AlreadyExists(new_client.id.to_string())),
            Entry::Vacant(slot) => {
                let client = Client::from(new_client.clone());
                slot.insert(client.clone());
                log::debug!("Registered client {}", client.id);
                Ok(client)
            }
        }
    }

    fn increment_lead_count(&self, id: &ClientId) -> RepositoryResult<Client> {
        let mut clients = self.clients.write()?;

        let client = clients.get_mut(id).ok_or(RepositoryError::NotFound)?;
        if !client.has_free_slot() {
            return Err(RepositoryError::CapacityExceeded(id.to_string()));
        }

        client.lead_count += 1;
        Ok(client.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::client::WorkingHours;
    use crate::domain::types::ClientName;

    fn new_client(id: &str, lead_count: u32, capacity: u32) -> NewClient {
        let start = Utc.with_ymd_and_hms(2024, 5, 6, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 5, 6, 17, 0, 0).unwrap();
        NewClient::new(
            ClientId::new(id).unwrap(),
            ClientName::new(format!("Client {id}")).unwrap(),
            WorkingHours::new(start, end).unwrap(),
            10,
            capacity,
        )
        .lead_count(lead_count)
    }

    fn id(value: &str) -> ClientId {
        ClientId::new(value).unwrap()
    }

    #[test]
    fn create_then_get_returns_the_record() {
        let repo = InMemoryRepository::new();
        let created = repo.create_client(&new_client("1", 2, 5)).unwrap();

        let fetched = repo.get_client_by_id(&id("1")).unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.lead_count, 2);
        assert!(repo.get_client_by_id(&id("2")).unwrap().is_none());
    }

    #[test]
    fn duplicate_create_keeps_existing_record() {
        let repo = InMemoryRepository::new();
        repo.create_client(&new_client("1", 0, 5)).unwrap();

        let mut duplicate = new_client("1", 3, 9);
        duplicate.priority = 99;
        let result = repo.create_client(&duplicate);

        assert_eq!(result, Err(RepositoryError::AlreadyExists("1".to_string())));
        let stored = repo.get_client_by_id(&id("1")).unwrap().unwrap();
        assert_eq!(stored.priority, 10);
        assert_eq!(stored.capacity, 5);
        assert_eq!(stored.lead_count, 0);
    }

    #[test]
    fn increment_adds_exactly_one_lead() {
        let repo = InMemoryRepository::new();
        repo.create_client(&new_client("1", 3, 5)).unwrap();

        let updated = repo.increment_lead_count(&id("1")).unwrap();

        assert_eq!(updated.lead_count, 4);
        assert_eq!(repo.get_client_by_id(&id("1")).unwrap().unwrap().lead_count, 4);
    }

    #[test]
    fn increment_at_capacity_fails_and_leaves_state() {
        let repo = InMemoryRepository::new();
        repo.create_client(&new_client("1", 5, 5)).unwrap();

        let result = repo.increment_lead_count(&id("1"));

        assert_eq!(result, Err(RepositoryError::CapacityExceeded("1".to_string())));
        assert_eq!(repo.get_client_by_id(&id("1")).unwrap().unwrap().lead_count, 5);
    }

    #[test]
    fn increment_zero_capacity_fails() {
        let repo = InMemoryRepository::new();
        repo.create_client(&new_client("1", 0, 0)).unwrap();

        assert!(matches!(
            repo.increment_lead_count(&id("1")),
            Err(RepositoryError::CapacityExceeded(_))
        ));
    }

    #[test]
    fn increment_unknown_client_is_not_found() {
        let repo = InMemoryRepository::new();
        assert_eq!(
            repo.increment_lead_count(&id("missing")),
            Err(RepositoryError::NotFound)
        );
    }

    #[test]
    fn listed_copies_are_detached_from_storage() {
        let repo = InMemoryRepository::new();
        repo.create_client(&new_client("1", 0, 5)).unwrap();
        repo.create_client(&new_client("2", 1, 5)).unwrap();

        let snapshot = repo.list_clients().unwrap();
        repo.increment_lead_count(&id("1")).unwrap();

        assert_eq!(snapshot.len(), 2);
        let first = snapshot.iter().find(|c| c.id.as_str() == "1").unwrap();
        assert_eq!(first.lead_count, 0);
    }

    #[test]
    fn clones_share_the_same_records() {
        let repo = InMemoryRepository::new();
        let handle = repo.clone();
        repo.create_client(&new_client("1", 0, 5)).unwrap();

        handle.increment_lead_count(&id("1")).unwrap();

        assert_eq!(repo.get_client_by_id(&id("1")).unwrap().unwrap().lead_count, 1);
    }
}
