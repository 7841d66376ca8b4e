//! Bootstrapping file-backed SQLite databases.

use agora::config::db::{DbKind, RuntimeEnv};
use agora::db::txn::with_txn;
use agora::error::AppError;
use agora::infra::state::build_state;
use agora::repos::groups;
use serial_test::serial;

use crate::support::factory::{seed_group, seed_user};

struct TestFileEnv {
    _dir: tempfile::TempDir,
}

impl TestFileEnv {
    fn new(file_name: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(file_name);
        std::env::set_var("TEST_SQLITE_FILE", path.to_str().expect("utf-8 path"));
        Self { _dir: dir }
    }
}

impl Drop for TestFileEnv {
    fn drop(&mut self) {
        std::env::remove_var("TEST_SQLITE_FILE");
    }
}

#[tokio::test]
#[serial]
async fn test_sqlite_file_bootstrap_migrates_and_reopens() -> Result<(), AppError> {
    let _env = TestFileEnv::new("agora_test.db");

    let state = build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteFile)
        .build()
        .await?;
    assert_eq!(state.db_kind(), Some(DbKind::SqliteFile));

    with_txn(&state, |txn| {
        Box::pin(async move {
            let admin = seed_user(txn, "filer").await?;
            seed_group(txn, "on-disk", admin.id).await?;
            assert_eq!(groups::list_groups(txn).await?.len(), 1);
            Ok::<_, AppError>(())
        })
    })
    .await?;

    let db = agora::require_db(&state)?;
    assert_eq!(migration::count_applied_migrations(db).await?, 1);

    // second bootstrap on the same file is a no-op migration
    let again = build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteFile)
        .build()
        .await?;
    let db = agora::require_db(&again)?;
    assert_eq!(migration::count_applied_migrations(db).await?, 1);

    Ok(())
}

#[tokio::test]
#[serial]
async fn test_test_env_rejects_non_test_file_name() {
    let _env = TestFileEnv::new("agora.db");

    let result = build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteFile)
        .build()
        .await;

    assert!(matches!(result, Err(AppError::Config { .. })));
}
