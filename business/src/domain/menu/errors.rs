#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("menu.export_unavailable")]
    ExportUnavailable,
    #[error("repository.database_error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
