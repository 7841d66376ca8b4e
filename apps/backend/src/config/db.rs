use std::env;

use crate::error::AppError;

/// Runtime environment; selects which database names/files are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    /// Enforces safety rules on database names
    Test,
}

/// Database engine/storage selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    /// Private in-memory database; lives as long as its single pooled connection
    SqliteMemory,
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

/// Per-engine session settings applied to every pooled connection
#[derive(Debug, Clone, PartialEq)]
pub enum DbSettings {
    Postgres {
        app_name: String,
        statement_timeout: String,
    },
    Sqlite {
        busy_timeout_ms: u64,
    },
}

/// Pool sizing and per-connection settings
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionSettings {
    pub pool_min: u32,
    pub pool_max: u32,
    pub acquire_timeout_ms: u64,
    pub db_settings: DbSettings,
}

impl ConnectionSettings {
    /// Read pool settings from the environment, falling back to per-kind defaults.
    pub fn from_env(db_kind: DbKind) -> Result<Self, AppError> {
        let (default_min, default_max) = match db_kind {
            DbKind::Postgres => (2, 10),
            DbKind::SqliteFile => (1, 4),
            // every extra connection would open a separate empty database
            DbKind::SqliteMemory => (1, 1),
        };

        let (pool_min, pool_max) = match db_kind {
            DbKind::SqliteMemory => (default_min, default_max),
            _ => (
                parse_var("AGORA_DB_POOL_MIN", default_min)?,
                parse_var("AGORA_DB_POOL_MAX", default_max)?,
            ),
        };

        if pool_min > pool_max {
            return Err(AppError::config(format!(
                "AGORA_DB_POOL_MIN ({pool_min}) must not exceed AGORA_DB_POOL_MAX ({pool_max})"
            )));
        }

        let db_settings = match db_kind {
            DbKind::Postgres => DbSettings::Postgres {
                app_name: env::var("AGORA_DB_APP_NAME").unwrap_or_else(|_| "agora".to_string()),
                statement_timeout: env::var("AGORA_DB_STATEMENT_TIMEOUT")
                    .unwrap_or_else(|_| "15s".to_string()),
            },
            DbKind::SqliteFile | DbKind::SqliteMemory => DbSettings::Sqlite {
                busy_timeout_ms: parse_var("AGORA_SQLITE_BUSY_TIMEOUT_MS", 5_000)?,
            },
        };

        Ok(Self {
            pool_min,
            pool_max,
            acquire_timeout_ms: parse_var("AGORA_DB_ACQUIRE_TIMEOUT_MS", 5_000)?,
            db_settings,
        })
    }
}

/// Builds a connection string for the given environment, engine and owner.
pub fn db_url(env: RuntimeEnv, db_kind: DbKind, owner: DbOwner) -> Result<String, AppError> {
    match db_kind {
        DbKind::Postgres => {
            let host = host();
            let port = port();
            let db_name = db_name(env)?;
            let (username, password) = credentials(owner)?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let file = sqlite_file(env)?;
            Ok(format!("sqlite://{file}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Get database host from environment (defaults to localhost)
fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

/// Get database port from environment (defaults to 5432)
fn port() -> String {
    env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string())
}

fn db_name(env: RuntimeEnv) -> Result<String, AppError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn sqlite_file(env: RuntimeEnv) -> Result<String, AppError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_SQLITE_FILE"),
        RuntimeEnv::Test => {
            let file = must_var("TEST_SQLITE_FILE")?;
            if !file.contains("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires SQLite file name to contain '_test', but got: '{file}'"
                )));
            }
            Ok(file)
        }
    }
}

fn credentials(owner: DbOwner) -> Result<(String, String), AppError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("AGORA_OWNER_USER")?,
            must_var("AGORA_OWNER_PASSWORD")?,
        )),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

fn parse_var<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| AppError::config(format!("Invalid value for '{name}': {e}"))),
        Err(_) => Ok(default),
    }
}
