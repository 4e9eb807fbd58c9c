/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error: {0}")]
    DatabaseError(String),
    /// Stored data could not be coerced into a domain shape (e.g. a menu item without price).
    #[error("repository.invalid_data: {0}")]
    InvalidData(String),
    #[error("repository.subscription_error: {0}")]
    Subscription(String),
}

impl RepositoryError {
    pub fn database(detail: impl std::fmt::Display) -> Self {
        RepositoryError::DatabaseError(detail.to_string())
    }

    pub fn invalid_data(detail: impl Into<String>) -> Self {
        RepositoryError::InvalidData(detail.into())
    }

    pub fn subscription(detail: impl std::fmt::Display) -> Self {
        RepositoryError::Subscription(detail.to_string())
    }
}
