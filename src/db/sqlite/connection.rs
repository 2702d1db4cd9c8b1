//! SQLite database connection and migration management.

use std::path::Path;

use sqlx::ConnectOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};

use super::{
    SqliteApplicantRepository, SqliteApplicationRepository, SqliteCompanyRepository,
    SqliteJobRepository,
};
use crate::db::{Database, DbError, DbResult};

// Embed migrations from migrations/ at compile time
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// SQLite database implementation.
///
/// Holds the connection options only. Every operation opens one
/// connection for its unit of work and the connection is released when
/// it drops, on every exit path; nothing is cached or pooled.
pub struct SqliteDatabase {
    options: SqliteConnectOptions,
}

impl SqliteDatabase {
    /// Configure a database at the given path. The file is created on
    /// first connection if missing; no connection is opened here.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        Self { options }
    }

    /// Open one connection for a single unit of work.
    pub(crate) async fn acquire(&self) -> DbResult<SqliteConnection> {
        self.options
            .connect()
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })
    }
}

impl Database for SqliteDatabase {
    type Companies<'a>
        = SqliteCompanyRepository<'a>
    where
        Self: 'a;
    type Jobs<'a>
        = SqliteJobRepository<'a>
    where
        Self: 'a;
    type Applicants<'a>
        = SqliteApplicantRepository<'a>
    where
        Self: 'a;
    type Applications<'a>
        = SqliteApplicationRepository<'a>
    where
        Self: 'a;

    async fn migrate(&self) -> DbResult<()> {
        let mut conn = self.acquire().await?;
        MIGRATOR
            .run(&mut conn)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })
    }

    fn companies(&self) -> Self::Companies<'_> {
        SqliteCompanyRepository { db: self }
    }

    fn jobs(&self) -> Self::Jobs<'_> {
        SqliteJobRepository { db: self }
    }

    fn applicants(&self) -> Self::Applicants<'_> {
        SqliteApplicantRepository { db: self }
    }

    fn applications(&self) -> Self::Applications<'_> {
        SqliteApplicationRepository { db: self }
    }
}
