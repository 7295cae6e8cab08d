use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Bill;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::latest_bill::{LatestBillParams, LatestBillUseCase};

pub struct LatestBillUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
}

#[async_trait]
impl LatestBillUseCase for LatestBillUseCaseImpl {
    async fn execute(&self, params: LatestBillParams) -> Result<Bill, OrderError> {
        self.repository
            .latest_bill(params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NoBills,
                other => OrderError::Repository(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::model::{OrderHistoryEntry, OrderLine};
    use crate::domain::shared::value_objects::UserId;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn record_order(&self, user_id: UserId, lines: &[OrderLine], bill_total: Option<f64>) -> Result<(), RepositoryError>;
            async fn latest_bill(&self, user_id: UserId) -> Result<Bill, RepositoryError>;
            async fn history(&self, user_id: UserId) -> Result<Vec<OrderHistoryEntry>, RepositoryError>;
        }
    }

    #[tokio::test]
    async fn should_return_the_repository_bill() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo.expect_latest_bill().returning(|user_id| {
            Ok(Bill {
                id: 3,
                user_id,
                total_cost: 16.0,
                billed_at: Utc::now(),
            })
        });

        let use_case = LatestBillUseCaseImpl {
            repository: Arc::new(mock_repo),
        };

        let bill = use_case
            .execute(LatestBillParams {
                user_id: UserId::new(1),
            })
            .await
            .unwrap();

        assert_eq!(bill.total_cost, 16.0);
    }

    #[tokio::test]
    async fn should_signal_when_no_bills_exist() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_latest_bill()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = LatestBillUseCaseImpl {
            repository: Arc::new(mock_repo),
        };

        let result = use_case
            .execute(LatestBillParams {
                user_id: UserId::new(1),
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::NoBills));
    }
}
