use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.empty")]
    EmptyOrder,
    #[error("order.quantity_mismatch")]
    QuantityMismatch,
    #[error("order.no_bills")]
    NoBills,
    #[error("order.billing_failed")]
    Billing(#[source] RepositoryError),
    #[error("repository.database_error")]
    Repository(#[from] RepositoryError),
}
