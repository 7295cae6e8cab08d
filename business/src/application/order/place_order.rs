use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::menu::repository::MenuRepository;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{OrderLine, OrderReceipt};
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};

pub struct PlaceOrderUseCaseImpl {
    pub menu_repository: Arc<dyn MenuRepository>,
    pub order_repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<OrderReceipt, OrderError> {
        if params.items.is_empty() || params.quantities.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        if params.items.len() != params.quantities.len() {
            return Err(OrderError::QuantityMismatch);
        }

        let mut lines = Vec::new();
        let mut unmatched = Vec::new();
        let mut total_cost = 0.0;

        for (name, &quantity) in params.items.iter().zip(&params.quantities) {
            match self.menu_repository.find_by_name(name).await? {
                Some(item) => {
                    let line = OrderLine {
                        item_id: item.id,
                        item_name: item.name,
                        quantity,
                        unit_price: item.price,
                    };
                    total_cost += line.cost();
                    lines.push(line);
                }
                None => {
                    self.logger
                        .warn(&format!("Ordered item not on the menu: {name}"));
                    unmatched.push(name.clone());
                }
            }
        }

        let bill_total = (total_cost > 0.0).then_some(total_cost);
        if !lines.is_empty() {
            self.order_repository
                .record_order(params.user_id, &lines, bill_total)
                .await
                .map_err(OrderError::Billing)?;
        }

        self.logger.info(&format!(
            "Order for user {}: {} line(s), {} unmatched, total {:.2}",
            params.user_id,
            lines.len(),
            unmatched.len(),
            total_cost
        ));

        Ok(OrderReceipt {
            lines,
            unmatched,
            total_cost,
            billed: bill_total.is_some(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::menu::model::MenuItem;
    use crate::domain::order::model::{Bill, OrderHistoryEntry};
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub MenuRepo {}

        #[async_trait]
        impl MenuRepository for MenuRepo {
            async fn get_all(&self) -> Result<Vec<MenuItem>, RepositoryError>;
            async fn find_by_name(&self, name: &str) -> Result<Option<MenuItem>, RepositoryError>;
            async fn find_by_name_ignoring_case(&self, name: &str) -> Result<Option<MenuItem>, RepositoryError>;
            async fn top_by_popularity(&self, limit: i64) -> Result<Vec<MenuItem>, RepositoryError>;
            async fn unique_names(&self) -> Result<Vec<String>, RepositoryError>;
        }
    }

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn record_order(&self, user_id: UserId, lines: &[OrderLine], bill_total: Option<f64>) -> Result<(), RepositoryError>;
            async fn latest_bill(&self, user_id: UserId) -> Result<Bill, RepositoryError>;
            async fn history(&self, user_id: UserId) -> Result<Vec<OrderHistoryEntry>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn menu_with_burger_and_fries() -> MockMenuRepo {
        let mut mock_menu = MockMenuRepo::new();
        mock_menu.expect_find_by_name().returning(|name| {
            Ok(match name {
                "Burger" => Some(MenuItem::from_repository(1, "Burger".to_string(), 5.0, 10)),
                "Fries" => Some(MenuItem::from_repository(2, "Fries".to_string(), 2.0, 7)),
                _ => None,
            })
        });
        mock_menu
    }

    #[tokio::test]
    async fn should_total_matched_lines_and_bill_once() {
        let mock_menu = menu_with_burger_and_fries();
        let mut mock_orders = MockOrderRepo::new();
        mock_orders
            .expect_record_order()
            .withf(|user_id, lines, bill_total| {
                *user_id == UserId::new(1) && lines.len() == 2 && *bill_total == Some(16.0)
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let use_case = PlaceOrderUseCaseImpl {
            menu_repository: Arc::new(mock_menu),
            order_repository: Arc::new(mock_orders),
            logger: mock_logger(),
        };

        let receipt = use_case
            .execute(PlaceOrderParams {
                user_id: UserId::new(1),
                items: vec!["Burger".to_string(), "Fries".to_string()],
                quantities: vec![2, 3],
            })
            .await
            .unwrap();

        assert_eq!(receipt.total_cost, 16.0);
        assert!(receipt.billed);
        assert!(receipt.unmatched.is_empty());
    }

    #[tokio::test]
    async fn should_report_unmatched_items_without_charging_them() {
        let mock_menu = menu_with_burger_and_fries();
        let mut mock_orders = MockOrderRepo::new();
        mock_orders
            .expect_record_order()
            .withf(|_, lines, bill_total| lines.len() == 1 && *bill_total == Some(5.0))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let use_case = PlaceOrderUseCaseImpl {
            menu_repository: Arc::new(mock_menu),
            order_repository: Arc::new(mock_orders),
            logger: mock_logger(),
        };

        let receipt = use_case
            .execute(PlaceOrderParams {
                user_id: UserId::new(1),
                items: vec!["Burger".to_string(), "Pizza".to_string()],
                quantities: vec![1, 4],
            })
            .await
            .unwrap();

        assert_eq!(receipt.total_cost, 5.0);
        assert_eq!(receipt.unmatched, vec!["Pizza".to_string()]);
    }

    #[tokio::test]
    async fn should_write_nothing_when_no_item_matches() {
        let mock_menu = menu_with_burger_and_fries();
        // No record_order expectation: a call would fail the test.
        let mock_orders = MockOrderRepo::new();

        let use_case = PlaceOrderUseCaseImpl {
            menu_repository: Arc::new(mock_menu),
            order_repository: Arc::new(mock_orders),
            logger: mock_logger(),
        };

        let receipt = use_case
            .execute(PlaceOrderParams {
                user_id: UserId::new(1),
                items: vec!["Pizza".to_string()],
                quantities: vec![2],
            })
            .await
            .unwrap();

        assert_eq!(receipt.total_cost, 0.0);
        assert!(!receipt.billed);
        assert!(receipt.lines.is_empty());
    }

    #[tokio::test]
    async fn should_reject_empty_orders() {
        let use_case = PlaceOrderUseCaseImpl {
            menu_repository: Arc::new(MockMenuRepo::new()),
            order_repository: Arc::new(MockOrderRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PlaceOrderParams {
                user_id: UserId::new(1),
                items: vec![],
                quantities: vec![],
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::EmptyOrder));
    }

    #[tokio::test]
    async fn should_reject_mismatched_item_and_quantity_counts() {
        let use_case = PlaceOrderUseCaseImpl {
            menu_repository: Arc::new(MockMenuRepo::new()),
            order_repository: Arc::new(MockOrderRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PlaceOrderParams {
                user_id: UserId::new(1),
                items: vec!["Burger".to_string()],
                quantities: vec![1, 2],
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::QuantityMismatch));
    }

    #[tokio::test]
    async fn should_surface_billing_failures() {
        let mock_menu = menu_with_burger_and_fries();
        let mut mock_orders = MockOrderRepo::new();
        mock_orders
            .expect_record_order()
            .returning(|_, _, _| Err(RepositoryError::DatabaseError));

        let use_case = PlaceOrderUseCaseImpl {
            menu_repository: Arc::new(mock_menu),
            order_repository: Arc::new(mock_orders),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PlaceOrderParams {
                user_id: UserId::new(1),
                items: vec!["Burger".to_string()],
                quantities: vec![1],
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::Billing(_)));
    }
}
