//! HTTP adapter mapping routes onto the service layer.

use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};

use crate::dto::api::ErrorResponse;
use crate::services::ServiceError;

pub mod api;
pub mod main;

/// Registers every route. The assignment route goes before the client
/// detail route so `assignLead` is never read as a client id.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(main::health)
        .service(api::create_client)
        .service(api::list_clients)
        .service(api::assign_lead)
        .service(api::show_client);
}

/// JSON extractor settings that answer malformed bodies with an
/// [`ErrorResponse`].
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::error!("Error binding JSON: {err}");
        let body = ErrorResponse::new("Invalid input data").details(err.to_string());
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// Maps a [`ServiceError`] onto the HTTP status vocabulary.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::InvalidId => {
            HttpResponse::BadRequest().json(ErrorResponse::new("Invalid client id"))
        }
        ServiceError::Form(details) | ServiceError::TypeConstraint(details) => {
            HttpResponse::BadRequest().json(ErrorResponse::new("Invalid input data").details(details))
        }
        ServiceError::DuplicateId(id) => HttpResponse::Conflict()
            .json(ErrorResponse::new("Client already exists").details(id)),
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorResponse::new("Client not found")),
        ServiceError::AssignmentFailed(id) => HttpResponse::Conflict()
            .json(ErrorResponse::new("Failed to assign lead").details(id)),
        ServiceError::Internal(message) => {
            log::error!("Internal error: {message}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error"))
        }
    }
}
