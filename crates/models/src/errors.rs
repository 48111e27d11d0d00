use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("duplicate: {0}")]
    Duplicate(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(msg)) = e.sql_err() {
            return ModelError::Duplicate(msg);
        }
        // Driver codes are not always classified (e.g. SQLite primary keys)
        let msg = e.to_string();
        if msg.contains("UNIQUE constraint failed") || msg.contains("duplicate key value") {
            return ModelError::Duplicate(msg);
        }
        ModelError::Db(msg)
    }
}
