pub mod assignment;
pub mod availability;
pub mod clients;
pub mod errors;
pub mod selection;

pub use errors::{ServiceError, ServiceResult};
