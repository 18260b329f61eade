use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    /// Classify an insert/update failure: unique violations become conflicts,
    /// foreign key violations mean the referenced id does not exist.
    pub fn from_db_err(e: sea_orm::DbErr) -> Self {
        use sea_orm::SqlErr;
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::Validation(msg),
            _ => Self::Db(e.to_string()),
        }
    }
}
