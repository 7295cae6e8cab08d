use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Bill, OrderHistoryEntry, OrderLine};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists the order lines and, when `bill_total` is set, the summary
    /// bill row. All rows commit in a single transaction: a failed bill
    /// insert must not leave orphaned order rows behind.
    async fn record_order(
        &self,
        user_id: UserId,
        lines: &[OrderLine],
        bill_total: Option<f64>,
    ) -> Result<(), RepositoryError>;

    /// The most recently inserted bill for the user, or `NotFound`.
    async fn latest_bill(&self, user_id: UserId) -> Result<Bill, RepositoryError>;

    /// All past orders joined with item names, newest first.
    async fn history(&self, user_id: UserId) -> Result<Vec<OrderHistoryEntry>, RepositoryError>;
}
