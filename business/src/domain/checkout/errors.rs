use super::model::CheckoutField;

/// Checkout failures. Validation variants never reach the order repository;
/// `SubmissionFailed` deliberately carries no backend detail.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.validation.{field}")]
    Validation { field: CheckoutField },
    #[error("checkout.cart_not_found")]
    CartNotFound,
    #[error("checkout.already_submitting")]
    AlreadySubmitting,
    #[error("checkout.submission_failed")]
    SubmissionFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl CheckoutError {
    pub fn validation(field: CheckoutField) -> Self {
        CheckoutError::Validation { field }
    }

    /// The offending input field, for inline display next to the form.
    pub fn field(&self) -> Option<CheckoutField> {
        match self {
            CheckoutError::Validation { field } => Some(*field),
            _ => None,
        }
    }
}
