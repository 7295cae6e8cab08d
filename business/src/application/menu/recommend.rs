use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::MenuItem;
use crate::domain::menu::repository::MenuRepository;
use crate::domain::menu::use_cases::recommend::{
    RECOMMENDATION_LIMIT, RecommendItemsUseCase, RecommendParams,
};

/// Placeholder ranking: the top items by stored popularity, whatever the
/// caller selected. Replace the body (not the trait) once a real similarity
/// model exists.
pub struct RecommendItemsUseCaseImpl {
    pub repository: Arc<dyn MenuRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecommendItemsUseCase for RecommendItemsUseCaseImpl {
    async fn execute(&self, params: RecommendParams) -> Result<Vec<MenuItem>, MenuError> {
        if let Some(selected) = &params.selected_item {
            self.logger.debug(&format!(
                "Recommendation requested for '{}' (popularity ranking, selection unused)",
                selected
            ));
        }

        let items = self
            .repository
            .top_by_popularity(RECOMMENDATION_LIMIT)
            .await?;
        Ok(items)
    }
}
