use business::domain::errors::RepositoryError;

/// Maps a failed write. Unique violations become `Duplicated` so use cases
/// can turn them into domain conflicts.
pub fn map_write_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        _ => RepositoryError::database(error),
    }
}

pub fn map_read_error(error: sqlx::Error) -> RepositoryError {
    RepositoryError::database(error)
}
