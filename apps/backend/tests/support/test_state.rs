use agora::config::db::{DbKind, RuntimeEnv};
use agora::infra::state::build_state;
use agora::state::app_state::AppState;
use agora::AppError;

/// Fresh, migrated in-memory database private to the calling test.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteMemory)
        .build()
        .await
}
