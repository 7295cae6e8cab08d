use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderHistoryEntry;
use crate::domain::shared::value_objects::UserId;

pub struct OrderHistoryParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait OrderHistoryUseCase: Send + Sync {
    async fn execute(&self, params: OrderHistoryParams)
    -> Result<Vec<OrderHistoryEntry>, OrderError>;
}
