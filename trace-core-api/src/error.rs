use thiserror::Error;

/// Error taxonomy shared by every layer of the traceability core.
///
/// None of these are retried internally: an operation that fails leaves no
/// partial writes behind and the error is surfaced to the caller as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TraceError {
    pub fn batch_not_found(batch_id: &str) -> Self {
        TraceError::NotFound(format!("batch '{batch_id}' not found"))
    }

    pub fn batch_id_taken(batch_id: &str) -> Self {
        TraceError::DuplicateIdentifier(format!("batch_id '{batch_id}' already exists"))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TraceError::NotFound(_))
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, TraceError::DuplicateIdentifier(_))
    }
}

pub type TraceResult<T> = Result<T, TraceError>;

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for TraceError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => TraceError::NotFound(err.to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                TraceError::DuplicateIdentifier(db_err.message().to_string())
            }
            _ => TraceError::Database(err.to_string()),
        }
    }
}
