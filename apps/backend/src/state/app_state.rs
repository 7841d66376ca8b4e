use sea_orm::DatabaseConnection;

use crate::config::db::{DbKind, RuntimeEnv};

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent when built without a database)
    db: Option<DatabaseConnection>,
    env: RuntimeEnv,
    db_kind: Option<DbKind>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, env: RuntimeEnv, db_kind: DbKind) -> Self {
        Self {
            db: Some(db),
            env,
            db_kind: Some(db_kind),
        }
    }

    pub fn without_db(env: RuntimeEnv) -> Self {
        Self {
            db: None,
            env,
            db_kind: None,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn env(&self) -> RuntimeEnv {
        self.env
    }

    pub fn db_kind(&self) -> Option<DbKind> {
        self.db_kind
    }
}
