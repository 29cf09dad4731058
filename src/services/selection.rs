use std::cmp::Ordering;

use crate::domain::client::Client;

/// Orders candidates by descending priority, then ascending load factor.
///
/// Remaining ties fall back to the client id so the ranking does not depend
/// on the order the registry happened to return the records in.
fn rank(a: &Client, b: &Client) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| a.load_factor().total_cmp(&b.load_factor()))
        .then_with(|| a.id.cmp(&b.id))
}

/// Picks the best-ranked candidate that still has a free slot.
///
/// Returns `None` when every candidate is at capacity.
pub fn select_best(candidates: &[Client]) -> Option<&Client> {
    let mut ranked: Vec<&Client> = candidates.iter().collect();
    ranked.sort_by(|a, b| rank(a, b));
    ranked.into_iter().find(|client| client.has_free_slot())
}
