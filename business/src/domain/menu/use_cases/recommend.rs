use async_trait::async_trait;

use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::MenuItem;

/// How many items a recommendation request returns at most.
pub const RECOMMENDATION_LIMIT: i64 = 5;

pub struct RecommendParams {
    /// The item the caller is looking at. Accepted for interface stability:
    /// the current ranking is popularity-only and ignores it. A similarity
    /// model can slot in behind this trait without an API change.
    pub selected_item: Option<String>,
}

#[async_trait]
pub trait RecommendItemsUseCase: Send + Sync {
    async fn execute(&self, params: RecommendParams) -> Result<Vec<MenuItem>, MenuError>;
}
