use chrono::NaiveDate;
use validator::Validate;

use crate::domain::client::Client;
use crate::domain::types::ClientId;
use crate::forms::FormError;
use crate::forms::client::AddClientForm;
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Validates the add-client form and registers the client.
///
/// Bare times of day in the working hours are anchored to `today`.
pub fn add_client<R>(repo: &R, form: AddClientForm, today: NaiveDate) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(FormError::from(err).into());
    }

    let new_client = form.to_new_client(today)?;

    repo.create_client(&new_client).map_err(|err| {
        log::error!("Failed to add a client: {err}");
        ServiceError::from(err)
    })
}

/// Fetches a client by its identifier.
pub fn get_client<R>(repo: &R, client_id: &str) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    let client_id = ClientId::new(client_id).map_err(|_| ServiceError::InvalidId)?;

    repo.get_client_by_id(&client_id)?
        .ok_or(ServiceError::NotFound)
}

/// Returns every registered client ordered by id.
pub fn list_clients<R>(repo: &R) -> ServiceResult<Vec<Client>>
where
    R: ClientReader + ?Sized,
{
    let mut clients = repo.list_clients()?;
    clients.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(clients)
}
