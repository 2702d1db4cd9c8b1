//! Tests for SqliteDatabase connection handling.

use tempfile::TempDir;

use crate::db::{Database, DbError, SqliteDatabase};

#[tokio::test(flavor = "multi_thread")]
async fn open_creates_database_file_on_first_connection() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("careerhub.db");

    let db = SqliteDatabase::open(&path);
    db.migrate().await.expect("Migration should succeed");

    assert!(path.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_is_idempotent() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db = SqliteDatabase::open(dir.path().join("careerhub.db"));

    db.migrate().await.expect("First migrate should succeed");
    db.migrate().await.expect("Second migrate should succeed");
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_path_fails_with_connection_error() {
    // The parent directory does not exist and is never created.
    let db = SqliteDatabase::open("/nonexistent-careerhub-dir/careerhub.db");

    let result = db.migrate().await;
    assert!(matches!(result, Err(DbError::Connection { .. })));
}
