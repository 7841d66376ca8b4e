pub mod db;

pub use db::{db_url, ConnectionSettings, DbKind, DbOwner, DbSettings, RuntimeEnv};
