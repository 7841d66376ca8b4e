#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod logging;
pub mod media;
pub mod repos;
pub mod state;

// Re-exports for public API
pub use config::db::{db_url, DbKind, DbOwner, RuntimeEnv};
pub use db::require_db;
pub use db::txn::with_txn;
pub use error::AppError;
pub use errors::DomainError;
pub use infra::db::bootstrap_db;
pub use infra::state::build_state;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
