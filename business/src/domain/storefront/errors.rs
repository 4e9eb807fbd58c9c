#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("storefront.not_found")]
    NotFound,
    #[error("storefront.invalid_color")]
    InvalidColor(&'static str),
    #[error("storefront.invalid_logo_url")]
    InvalidLogoUrl,
    #[error("storefront.invalid_currency")]
    InvalidCurrency,
    #[error("storefront.invalid_public_name")]
    InvalidPublicName,
    #[error("storefront.public_name_taken")]
    PublicNameTaken,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
