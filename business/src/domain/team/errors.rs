#[derive(Debug, thiserror::Error)]
pub enum TeamError {
    #[error("team.name_empty")]
    NameEmpty,
    #[error("team.invalid_email")]
    InvalidEmail,
    #[error("team.member_already_exists")]
    AlreadyExists,
    #[error("team.member_not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
