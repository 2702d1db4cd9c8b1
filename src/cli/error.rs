use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;
use crate::upload::UploadError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Database error: {0}")]
    #[diagnostic(code(careerhub::cli::database))]
    Db(#[from] DbError),

    #[error("Resume upload failed: {0}")]
    #[diagnostic(code(careerhub::cli::upload))]
    Upload(#[from] UploadError),

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(careerhub::cli::invalid_argument))]
    InvalidArgument { message: String },

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(careerhub::cli::render))]
    Render(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
