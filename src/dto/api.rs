//! Response bodies exposed by the lead routing API endpoints.

use serde::Serialize;

use crate::domain::client::Client;
use crate::services::assignment::NoneAvailableReason;

/// Body carrying a single client, optionally with a status message.
#[derive(Debug, Serialize)]
pub struct ClientResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub client: Client,
}

impl ClientResponse {
    pub fn new(client: Client) -> Self {
        Self {
            message: None,
            client,
        }
    }

    pub fn with_message(message: &'static str, client: Client) -> Self {
        Self {
            message: Some(message),
            client,
        }
    }
}

/// Body returned by the client listing endpoint.
#[derive(Debug, Serialize)]
pub struct ClientsResponse {
    pub clients: Vec<Client>,
}

/// Error body shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Underlying cause, when it helps the caller fix the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Set when no client could take a lead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<NoneAvailableReason>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            reason: None,
        }
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn reason(mut self, reason: NoneAvailableReason) -> Self {
        self.reason = Some(reason);
        self
    }
}
