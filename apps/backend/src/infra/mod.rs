//! Infrastructure layer - database bootstrap, state building and error translation.

pub mod db;
pub mod db_errors;
pub mod state;

pub use db::{bootstrap_db, build_admin_pool, build_pool};
