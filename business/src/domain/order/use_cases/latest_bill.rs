use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Bill;
use crate::domain::shared::value_objects::UserId;

pub struct LatestBillParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait LatestBillUseCase: Send + Sync {
    async fn execute(&self, params: LatestBillParams) -> Result<Bill, OrderError>;
}
