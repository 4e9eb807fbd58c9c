#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.store_not_found")]
    StoreNotFound,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.checkout_in_progress")]
    CheckoutInProgress,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl CartError {
    /// Maps a session lookup failure; a missing session is a `CartError::NotFound`.
    pub fn from_lookup(error: crate::domain::errors::RepositoryError) -> Self {
        match error {
            crate::domain::errors::RepositoryError::NotFound => CartError::NotFound,
            other => CartError::Repository(other),
        }
    }
}
