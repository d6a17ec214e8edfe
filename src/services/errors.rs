use thiserror::Error;
use validator::ValidationErrors;

use crate::export::ExportError;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller supplied parameters outside their contract.
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("export failed: {0}")]
    Export(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Validation(errors.to_string())
    }
}

impl From<ExportError> for ServiceError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::UnsupportedFormat(tag) => ServiceError::UnsupportedFormat(tag),
            other => ServiceError::Export(other.to_string()),
        }
    }
}

impl ServiceError {
    /// Whether the error was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServiceError::Validation(_) | ServiceError::UnsupportedFormat(_)
        )
    }
}
