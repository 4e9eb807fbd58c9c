#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("menu.name_empty")]
    NameEmpty,
    #[error("menu.negative_price")]
    NegativePrice,
    #[error("menu.price_precision")]
    PricePrecision,
    #[error("menu.duplicate_item_id")]
    DuplicateItemId(String),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
