//! SQLite CompanyRepository implementation.

use sqlx::Row;
use tracing::debug;

use super::connection::SqliteDatabase;
use super::helpers::{insertion_error, retrieval_error};
use crate::db::{Company, CompanyRepository, DbResult, Id, NewCompany};

/// sqlx-backed company repository.
pub struct SqliteCompanyRepository<'a> {
    pub(crate) db: &'a SqliteDatabase,
}

impl CompanyRepository for SqliteCompanyRepository<'_> {
    async fn insert(&self, company: &NewCompany) -> DbResult<Id> {
        let mut conn = self.db.acquire().await?;
        let result = sqlx::query("INSERT INTO companies (name, location) VALUES (?, ?)")
            .bind(&company.name)
            .bind(&company.location)
            .execute(&mut conn)
            .await
            .map_err(insertion_error("company"))?;

        let id = result.last_insert_rowid();
        debug!(id, name = %company.name, "company inserted");
        Ok(id)
    }

    async fn resolve_id(&self, name: &str) -> DbResult<Option<Id>> {
        let mut conn = self.db.acquire().await?;
        sqlx::query_scalar("SELECT id FROM companies WHERE name = ? ORDER BY id LIMIT 1")
            .bind(name)
            .fetch_optional(&mut conn)
            .await
            .map_err(retrieval_error("company"))
    }

    async fn list(&self) -> DbResult<Vec<Company>> {
        let mut conn = self.db.acquire().await?;
        let rows = sqlx::query("SELECT id, name, location FROM companies")
            .fetch_all(&mut conn)
            .await
            .map_err(retrieval_error("company"))?;

        Ok(rows
            .into_iter()
            .map(|row| Company {
                id: row.get("id"),
                name: row.get("name"),
                location: row.get("location"),
            })
            .collect())
    }
}
