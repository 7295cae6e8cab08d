use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::UserId;

/// One matched (item, quantity) pair of a submitted order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub item_id: i64,
    pub item_name: String,
    pub quantity: i64,
    pub unit_price: f64,
}

impl OrderLine {
    pub fn cost(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Outcome of an order submission. Unmatched names are reported back to the
/// caller instead of being dropped on the floor.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    pub lines: Vec<OrderLine>,
    pub unmatched: Vec<String>,
    pub total_cost: f64,
    /// False when nothing matched, so no bill row was written.
    pub billed: bool,
}

/// A persisted total-cost record summarizing one order submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub id: i64,
    pub user_id: UserId,
    pub total_cost: f64,
    pub billed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderHistoryEntry {
    pub item_name: String,
    pub quantity: i64,
    pub ordered_at: DateTime<Utc>,
}
