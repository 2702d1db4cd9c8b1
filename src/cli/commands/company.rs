use tabled::{Table, Tabled};

use crate::cli::error::CliResult;
use crate::cli::utils::apply_table_style;
use crate::db::{Company, CompanyRepository, Database, SqliteDatabase};

#[derive(Tabled)]
struct CompanyDisplay {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Location")]
    location: String,
}

impl From<&Company> for CompanyDisplay {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id,
            name: company.name.clone(),
            location: company.location.clone(),
        }
    }
}

/// List all companies
pub async fn list(db: &SqliteDatabase, format: &str) -> CliResult<String> {
    let companies = db.companies().list().await?;

    if format == "json" {
        return Ok(serde_json::to_string_pretty(&companies)?);
    }

    if companies.is_empty() {
        return Ok("No companies found".to_string());
    }
    let mut table = Table::new(companies.iter().map(CompanyDisplay::from));
    apply_table_style(&mut table);
    Ok(table.to_string())
}
