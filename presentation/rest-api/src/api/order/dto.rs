use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::order::model::{Bill, OrderHistoryEntry, OrderReceipt};

#[derive(Debug, Clone, Object)]
pub struct PlaceOrderRequest {
    /// Item names, matched exactly against the menu
    pub items: Vec<String>,
    /// One quantity per item, same order
    pub quantities: Vec<i64>,
}

#[derive(Debug, Clone, Object)]
pub struct OrderPlacedResponse {
    pub message: String,
    pub total_cost: f64,
    /// Names that matched no menu item; they were skipped, not charged
    pub unmatched_items: Vec<String>,
}

impl From<OrderReceipt> for OrderPlacedResponse {
    fn from(receipt: OrderReceipt) -> Self {
        Self {
            message: "Order placed successfully!".to_string(),
            total_cost: receipt.total_cost,
            unmatched_items: receipt.unmatched,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct LatestBillResponse {
    pub total_cost: f64,
    pub order_date: DateTime<Utc>,
}

impl From<Bill> for LatestBillResponse {
    fn from(bill: Bill) -> Self {
        Self {
            total_cost: bill.total_cost,
            order_date: bill.billed_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderHistoryEntryDto {
    pub item: String,
    pub quantity: i64,
    pub date: DateTime<Utc>,
}

impl From<OrderHistoryEntry> for OrderHistoryEntryDto {
    fn from(entry: OrderHistoryEntry) -> Self {
        Self {
            item: entry.item_name,
            quantity: entry.quantity,
            date: entry.ordered_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderHistoryResponse {
    pub order_history: Vec<OrderHistoryEntryDto>,
}
