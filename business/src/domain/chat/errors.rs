#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("repository.database_error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
