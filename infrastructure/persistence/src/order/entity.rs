use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::order::model::{Bill, OrderHistoryEntry};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct BillEntity {
    pub bill_id: i64,
    pub user_id: i64,
    pub total_cost: f64,
    pub bill_date: DateTime<Utc>,
}

impl BillEntity {
    pub fn into_domain(self) -> Bill {
        Bill {
            id: self.bill_id,
            user_id: UserId::new(self.user_id),
            total_cost: self.total_cost,
            billed_at: self.bill_date,
        }
    }
}

/// Projection of an order row joined with its item name.
#[derive(Debug, FromRow)]
pub struct OrderHistoryEntity {
    pub name: String,
    pub quantity: i64,
    pub order_date: DateTime<Utc>,
}

impl OrderHistoryEntity {
    pub fn into_domain(self) -> OrderHistoryEntry {
        OrderHistoryEntry {
            item_name: self.name,
            quantity: self.quantity,
            ordered_at: self.order_date,
        }
    }
}
