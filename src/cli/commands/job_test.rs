//! Tests for job commands.

use tempfile::TempDir;

use crate::cli::commands::job::{self, PostJobArgs};
use crate::cli::error::CliError;
use crate::db::{Database, SqliteDatabase};

async fn setup_db() -> (TempDir, SqliteDatabase) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db = SqliteDatabase::open(dir.path().join("careerhub.db"));
    db.migrate().await.expect("Migration should succeed");
    (dir, db)
}

fn make_post_args(salary: &str) -> PostJobArgs {
    PostJobArgs {
        company: "Acme".to_string(),
        company_location: "Berlin".to_string(),
        title: "Backend Engineer".to_string(),
        description: "Build backend services".to_string(),
        location: "Remote".to_string(),
        salary: salary.to_string(),
        job_type: "Full-time".to_string(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn post_then_list_shows_the_job() {
    let (_dir, db) = setup_db().await;

    let output = job::post(&db, make_post_args("70000"))
        .await
        .expect("Post should succeed");
    assert!(output.contains("Backend Engineer"));

    let table = job::list(&db, "table").await.expect("List should succeed");
    assert!(table.contains("Backend Engineer"));
    assert!(table.contains("Full-time"));
}

#[tokio::test(flavor = "multi_thread")]
async fn post_rejects_unparseable_salary() {
    let (_dir, db) = setup_db().await;

    let result = job::post(&db, make_post_args("a lot")).await;
    assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_json_outputs_parseable_json() {
    let (_dir, db) = setup_db().await;
    job::post(&db, make_post_args("70000")).await.unwrap();

    let output = job::list(&db, "json").await.expect("List should succeed");
    let parsed: serde_json::Value = serde_json::from_str(&output).expect("Output should be JSON");
    assert_eq!(parsed.as_array().map(|jobs| jobs.len()), Some(1));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_reports_empty_store() {
    let (_dir, db) = setup_db().await;

    let output = job::list(&db, "table").await.expect("List should succeed");
    assert_eq!(output, "No job listings found");
}

#[tokio::test(flavor = "multi_thread")]
async fn average_salary_renders_the_mean() {
    let (_dir, db) = setup_db().await;
    job::post(&db, make_post_args("100")).await.unwrap();
    job::post(&db, make_post_args("300")).await.unwrap();

    let output = job::average_salary(&db)
        .await
        .expect("Average should succeed");
    assert_eq!(output, "Average salary: 200");
}

#[tokio::test(flavor = "multi_thread")]
async fn average_salary_on_empty_store_is_a_db_error() {
    let (_dir, db) = setup_db().await;

    let result = job::average_salary(&db).await;
    assert!(matches!(result, Err(CliError::Db(_))));
}
