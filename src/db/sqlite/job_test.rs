//! Tests for SqliteJobRepository.

use std::str::FromStr;

use chrono::Utc;
use rust_decimal::Decimal;
use tempfile::TempDir;

use crate::db::{
    CompanyRepository, Database, DbError, JobRepository, NewCompany, NewJobListing, SqliteDatabase,
};

async fn setup_db() -> (TempDir, SqliteDatabase) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db = SqliteDatabase::open(dir.path().join("careerhub.db"));
    db.migrate().await.expect("Migration should succeed");
    (dir, db)
}

fn make_company(name: &str) -> NewCompany {
    NewCompany {
        name: name.to_string(),
        location: "Hamburg".to_string(),
    }
}

fn make_job(title: &str, salary: i64) -> NewJobListing {
    NewJobListing {
        title: title.to_string(),
        description: "Build and maintain backend services".to_string(),
        location: "Remote".to_string(),
        salary: Decimal::from(salary),
        job_type: "Full-time".to_string(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn post_for_new_company_creates_exactly_one_company_row() {
    let (_dir, db) = setup_db().await;

    db.jobs()
        .post(&make_job("Backend Engineer", 70_000), &make_company("Acme"))
        .await
        .expect("Post should succeed");

    let companies = db.companies().list().await.unwrap();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].name, "Acme");

    let jobs = db.jobs().list().await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].company_id, companies[0].id);
}

#[tokio::test(flavor = "multi_thread")]
async fn post_for_existing_company_reuses_its_id() {
    let (_dir, db) = setup_db().await;
    let jobs = db.jobs();

    jobs.post(&make_job("Backend Engineer", 70_000), &make_company("Acme"))
        .await
        .unwrap();
    jobs.post(&make_job("Data Engineer", 80_000), &make_company("Acme"))
        .await
        .unwrap();

    let companies = db.companies().list().await.unwrap();
    assert_eq!(companies.len(), 1);

    let listings = jobs.list().await.unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].company_id, companies[0].id);
    assert_eq!(listings[1].company_id, companies[0].id);
}

#[tokio::test(flavor = "multi_thread")]
async fn post_stamps_posted_date_with_current_time() {
    let (_dir, db) = setup_db().await;

    let before = Utc::now();
    db.jobs()
        .post(&make_job("Backend Engineer", 70_000), &make_company("Acme"))
        .await
        .unwrap();
    let after = Utc::now();

    let listings = db.jobs().list().await.unwrap();
    // Compare at second granularity; sub-second storage precision is not
    // part of the contract.
    assert!(listings[0].posted_date.timestamp() >= before.timestamp());
    assert!(listings[0].posted_date.timestamp() <= after.timestamp());
}

#[tokio::test(flavor = "multi_thread")]
async fn list_on_empty_store_returns_empty() {
    let (_dir, db) = setup_db().await;

    let listings = db.jobs().list().await.expect("List should succeed");
    assert!(listings.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn list_round_trips_all_fields() {
    let (_dir, db) = setup_db().await;

    let job = NewJobListing {
        title: "Compiler Engineer".to_string(),
        description: "Work on the optimizer".to_string(),
        location: "Munich".to_string(),
        salary: Decimal::from_str("98765.43").unwrap(),
        job_type: "Contract".to_string(),
    };
    db.jobs().post(&job, &make_company("Acme")).await.unwrap();

    let listings = db.jobs().list().await.unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].title, "Compiler Engineer");
    assert_eq!(listings[0].description, "Work on the optimizer");
    assert_eq!(listings[0].location, "Munich");
    assert_eq!(listings[0].salary, Decimal::from_str("98765.43").unwrap());
    assert_eq!(listings[0].job_type, "Contract");
}

#[tokio::test(flavor = "multi_thread")]
async fn average_salary_is_exact_mean() {
    let (_dir, db) = setup_db().await;
    let jobs = db.jobs();

    for salary in [100, 200, 300] {
        jobs.post(&make_job("Engineer", salary), &make_company("Acme"))
            .await
            .unwrap();
    }

    let average = jobs.average_salary().await.expect("Average should succeed");
    assert_eq!(average, Decimal::from(200));
}

#[tokio::test(flavor = "multi_thread")]
async fn average_salary_over_empty_store_fails() {
    let (_dir, db) = setup_db().await;

    let result = db.jobs().average_salary().await;
    assert!(matches!(result, Err(DbError::InvalidData { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn average_salary_rejects_negative_salaries() {
    let (_dir, db) = setup_db().await;
    let jobs = db.jobs();

    jobs.post(&make_job("Engineer", 100), &make_company("Acme"))
        .await
        .unwrap();
    jobs.post(&make_job("Intern", -1), &make_company("Acme"))
        .await
        .unwrap();

    let result = jobs.average_salary().await;
    assert!(matches!(result, Err(DbError::InvalidData { .. })));
}
