//! Domain aggregates exposed by the lead routing service layer.

pub mod client;
pub mod types;
