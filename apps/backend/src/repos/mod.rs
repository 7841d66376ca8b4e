//! Repository functions for domain layer.
//!
//! Reads are generic over `ConnectionTrait`; writes take the transaction they
//! run in. Everything returns `DomainError`.

pub mod baskets;
pub mod comments;
pub mod groups;
pub mod items;
pub mod posts;
pub mod profiles;
pub mod users;
