//! Connection pools, per-connection session settings and schema bootstrap.

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use migration::MigrationCommand;
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, SqlxPostgresConnector, SqlxSqliteConnector,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{info, trace, warn};

use crate::config::db::{db_url, ConnectionSettings, DbKind, DbOwner, DbSettings, RuntimeEnv};
use crate::error::AppError;

fn get_db_engine(db_kind: DbKind) -> &'static str {
    match db_kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Retry a connection attempt with fixed interval delays.
/// Returns the error of the last attempt once all retries are exhausted.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(attempt, max_attempts, interval_ms, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

/// Ordered session-level SQL statements for the given settings.
fn build_session_statements(settings: &DbSettings) -> Vec<String> {
    match settings {
        DbSettings::Sqlite { busy_timeout_ms } => vec![
            // cascades depend on this
            "PRAGMA foreign_keys = ON;".to_string(),
            format!("PRAGMA busy_timeout = {busy_timeout_ms};"),
        ],
        DbSettings::Postgres {
            app_name,
            statement_timeout,
        } => vec![
            format!("SET application_name = '{}';", app_name.replace('\'', "''")),
            "SET timezone = 'UTC';".to_string(),
            format!(
                "SET statement_timeout = '{}';",
                statement_timeout.replace('\'', "''")
            ),
        ],
    }
}

/// Build the application pool with per-connection session settings.
/// Does not run migrations.
pub async fn build_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
    pool_cfg: &ConnectionSettings,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(env, db_kind, DbOwner::App)?;
    let statements = build_session_statements(&pool_cfg.db_settings);

    match db_kind {
        DbKind::SqliteFile | DbKind::SqliteMemory => {
            let connect_opts = SqliteConnectOptions::from_str(&url)
                .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
                .create_if_missing(true)
                .foreign_keys(true);

            let mut pool_opts = SqlitePoolOptions::new()
                .min_connections(pool_cfg.pool_min)
                .max_connections(pool_cfg.pool_max)
                .acquire_timeout(Duration::from_millis(pool_cfg.acquire_timeout_ms));

            if db_kind == DbKind::SqliteMemory {
                // Dropping the only connection would drop the database
                pool_opts = pool_opts.idle_timeout(None).max_lifetime(None);
            }

            let pool: SqlitePool = pool_opts
                .after_connect(move |conn, _meta| {
                    let statements = statements.clone();
                    Box::pin(async move {
                        for stmt in &statements {
                            sqlx::query(stmt).execute(&mut *conn).await?;
                        }
                        trace!("db=sqlite hook=after_connect ok");
                        Ok::<_, sqlx::Error>(())
                    })
                })
                .connect_with(connect_opts)
                .await
                .map_err(|e| AppError::config(format!("failed to create SQLite pool: {e}")))?;

            let memory = db_kind == DbKind::SqliteMemory;
            info!(
                engine = "sqlite",
                memory,
                min = pool_cfg.pool_min,
                max = pool_cfg.pool_max,
                acquire_timeout_ms = pool_cfg.acquire_timeout_ms,
                "pool=create"
            );
            Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
        }
        DbKind::Postgres => {
            let pool = PgPoolOptions::new()
                .min_connections(pool_cfg.pool_min)
                .max_connections(pool_cfg.pool_max)
                .acquire_timeout(Duration::from_millis(pool_cfg.acquire_timeout_ms))
                .idle_timeout(Duration::from_secs(30))
                .after_connect(move |conn, _meta| {
                    let statements = statements.clone();
                    Box::pin(async move {
                        for stmt in &statements {
                            sqlx::query(stmt).execute(&mut *conn).await?;
                        }
                        Ok::<_, sqlx::Error>(())
                    })
                })
                .connect(&url)
                .await
                .map_err(|e| AppError::config(format!("failed to connect to Postgres: {e}")))?;

            info!(
                engine = "postgresql",
                min = pool_cfg.pool_min,
                max = pool_cfg.pool_max,
                acquire_timeout_ms = pool_cfg.acquire_timeout_ms,
                "pool=create"
            );
            Ok(SqlxPostgresConnector::from_sqlx_postgres_pool(pool))
        }
    }
}

/// Single-connection owner pool used for migrations.
///
/// Postgres connects with owner credentials and retries while the server comes
/// up. SQLite files are opened through the regular pool builder so the
/// foreign-key pragma is applied.
pub async fn build_admin_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, AppError> {
    match db_kind {
        DbKind::Postgres => {
            let url = db_url(env, db_kind, DbOwner::Owner)?;
            let mut opt = ConnectOptions::new(url);
            opt.min_connections(1)
                .max_connections(1)
                .acquire_timeout(Duration::from_secs(2))
                .sqlx_logging(false);

            retry_connection(
                || {
                    let opt = opt.clone();
                    async move {
                        Database::connect(opt).await.map_err(|e| {
                            AppError::config(format!("failed to connect to Postgres (admin pool): {e}"))
                        })
                    }
                },
                5,
                500,
            )
            .await
        }
        DbKind::SqliteFile | DbKind::SqliteMemory => {
            let mut settings = ConnectionSettings::from_env(db_kind)?;
            settings.pool_min = 1;
            settings.pool_max = 1;
            build_pool(env, db_kind, &settings).await
        }
    }
}

/// Build the app pool *and* guarantee the schema is current.
///
/// - SqliteMemory: migrate on the returned pool; any other connection would
///   see a different, empty database.
/// - SqliteFile: migrate on the app pool (same file, same permissions).
/// - Postgres: migrate through the owner pool, then open the app pool.
pub async fn bootstrap_db(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, AppError> {
    let settings = ConnectionSettings::from_env(db_kind)?;

    info!(
        env = ?env,
        db_kind = ?db_kind,
        engine = get_db_engine(db_kind),
        pid = std::process::id(),
        "bootstrap=start"
    );

    let pool = match db_kind {
        DbKind::Postgres => {
            let admin = build_admin_pool(env, db_kind).await?;
            migration::migrate(&admin, MigrationCommand::Up).await?;
            admin.close().await?;
            build_pool(env, db_kind, &settings).await?
        }
        DbKind::SqliteFile | DbKind::SqliteMemory => {
            let pool = build_pool(env, db_kind, &settings).await?;
            migration::migrate(&pool, MigrationCommand::Up).await?;
            pool
        }
    };

    info!("bootstrap=ready");
    Ok(pool)
}
