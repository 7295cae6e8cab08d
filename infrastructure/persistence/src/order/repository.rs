use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;
use business::domain::order::model::{Bill, OrderHistoryEntry, OrderLine};
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::UserId;

use crate::db::map_sqlx_err;

use super::entity::{BillEntity, OrderHistoryEntity};

pub struct OrderRepositorySqlite {
    pool: SqlitePool,
}

impl OrderRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositorySqlite {
    async fn record_order(
        &self,
        user_id: UserId,
        lines: &[OrderLine],
        bill_total: Option<f64>,
    ) -> Result<(), RepositoryError> {
        // One transaction for the lines and the bill: a failed bill insert
        // rolls the order rows back with it.
        let mut tx = self.pool.begin().await.map_err(map_sqlx_err)?;
        let now = Utc::now();

        for line in lines {
            sqlx::query(
                "INSERT INTO orders (user_id, item_id, quantity, order_date) VALUES (?, ?, ?, ?)",
            )
            .bind(user_id.value())
            .bind(line.item_id)
            .bind(line.quantity)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_err)?;
        }

        if let Some(total_cost) = bill_total {
            sqlx::query("INSERT INTO bills (user_id, total_cost, bill_date) VALUES (?, ?, ?)")
                .bind(user_id.value())
                .bind(total_cost)
                .bind(now)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_err)?;
        }

        tx.commit().await.map_err(map_sqlx_err)
    }

    async fn latest_bill(&self, user_id: UserId) -> Result<Bill, RepositoryError> {
        let entity = sqlx::query_as::<_, BillEntity>(
            "SELECT bill_id, user_id, total_cost, bill_date FROM bills
             WHERE user_id = ? ORDER BY bill_date DESC, bill_id DESC LIMIT 1",
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn history(&self, user_id: UserId) -> Result<Vec<OrderHistoryEntry>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderHistoryEntity>(
            "SELECT i.name, o.quantity, o.order_date FROM orders o
             JOIN items i ON o.item_id = i.item_id
             WHERE o.user_id = ?
             ORDER BY o.order_date DESC, o.order_id DESC",
        )
        .bind(user_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
