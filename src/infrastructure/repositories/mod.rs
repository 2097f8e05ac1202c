pub mod sqlx_board_repository;
pub mod sqlx_contact_repository;
pub mod sqlx_user_repository;

use crate::domain::shared::errors::DomainError;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Maps a sqlx failure to a domain error, recognising unique and foreign key
/// violations so callers can answer 409 / 404 instead of 500.
pub(crate) fn map_db_error(err: sqlx::Error, conflict: &str, missing: &str) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => return DomainError::Conflict(conflict.to_string()),
            Some(FOREIGN_KEY_VIOLATION) => return DomainError::NotFound(missing.to_string()),
            _ => {}
        }
    }
    tracing::error!(database_error = %err);
    DomainError::InfrastructureError(err.to_string())
}

pub(crate) fn infra(err: sqlx::Error) -> DomainError {
    tracing::error!(database_error = %err);
    DomainError::InfrastructureError(err.to_string())
}
