//! Runtime models that live outside the domain layer.

pub mod config;
