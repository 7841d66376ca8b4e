//! Error handling for the Agora backend.

pub mod domain;

pub use domain::DomainError;
