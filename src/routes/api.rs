//! JSON endpoints for client registration, lookup and lead assignment.

use actix_web::{HttpResponse, Responder, get, post, web};

use crate::clock::Clock;
use crate::dto::api::{ClientResponse, ClientsResponse, ErrorResponse};
use crate::forms::client::AddClientForm;
use crate::repository::InMemoryRepository;
use crate::routes::service_error_response;
use crate::services::assignment::{self, LeadAssignment};
use crate::services::clients as clients_service;

#[post("/clients")]
pub async fn create_client(
    repo: web::Data<InMemoryRepository>,
    clock: web::Data<dyn Clock>,
    web::Json(form): web::Json<AddClientForm>,
) -> impl Responder {
    let today = clock.now().date_naive();

    match clients_service::add_client(repo.get_ref(), form, today) {
        Ok(client) => {
            log::info!("Client {} added", client.id);
            HttpResponse::Created().json(ClientResponse::with_message("Client added", client))
        }
        Err(err) => service_error_response(err),
    }
}

#[get("/clients")]
pub async fn list_clients(repo: web::Data<InMemoryRepository>) -> impl Responder {
    match clients_service::list_clients(repo.get_ref()) {
        Ok(clients) => HttpResponse::Ok().json(ClientsResponse { clients }),
        Err(err) => service_error_response(err),
    }
}

#[get("/clients/assignLead")]
pub async fn assign_lead(
    repo: web::Data<InMemoryRepository>,
    clock: web::Data<dyn Clock>,
) -> impl Responder {
    match assignment::assign_lead(repo.get_ref(), clock.now()) {
        Ok(LeadAssignment::Assigned(client)) => {
            HttpResponse::Ok().json(ClientResponse::with_message("Lead assigned", client))
        }
        Ok(LeadAssignment::NoneAvailable(reason)) => HttpResponse::NotFound()
            .json(ErrorResponse::new("No suitable client found").reason(reason)),
        Err(err) => service_error_response(err),
    }
}

#[get("/clients/{client_id}")]
pub async fn show_client(
    client_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match clients_service::get_client(repo.get_ref(), &client_id) {
        Ok(client) => HttpResponse::Ok().json(ClientResponse::new(client)),
        Err(err) => service_error_response(err),
    }
}
