#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.missing_credentials")]
    MissingCredentials,
    #[error("user.duplicated")]
    DuplicateUsername,
    #[error("user.invalid_credentials")]
    InvalidCredentials,
    #[error("user.not_found")]
    NotFound,
    #[error("repository.database_error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
