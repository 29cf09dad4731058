use chrono::{DateTime, Utc};

use crate::domain::client::Client;

/// Keeps the clients accepting leads at `now`, preserving input order.
///
/// A client qualifies when its capacity is non-zero and its working hours
/// contain `now`.
pub fn filter_available(clients: Vec<Client>, now: DateTime<Utc>) -> Vec<Client> {
    clients
        .into_iter()
        .filter(|client| {
            let available = client.is_available_at(now);
            if !available {
                log::debug!(
                    "Client {} not available at {}",
                    client.id,
                    now.format("%H:%M")
                );
            }
            available
        })
        .collect()
}
