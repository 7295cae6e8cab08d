use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderHistoryEntry;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::order_history::{OrderHistoryParams, OrderHistoryUseCase};

pub struct OrderHistoryUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
}

#[async_trait]
impl OrderHistoryUseCase for OrderHistoryUseCaseImpl {
    async fn execute(
        &self,
        params: OrderHistoryParams,
    ) -> Result<Vec<OrderHistoryEntry>, OrderError> {
        Ok(self.repository.history(params.user_id).await?)
    }
}
