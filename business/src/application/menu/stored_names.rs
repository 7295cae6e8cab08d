use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::menu::errors::MenuError;
use crate::domain::menu::repository::MenuRepository;
use crate::domain::menu::use_cases::stored_names::ListStoredNamesUseCase;

pub struct ListStoredNamesUseCaseImpl {
    pub repository: Arc<dyn MenuRepository>,
}

#[async_trait]
impl ListStoredNamesUseCase for ListStoredNamesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<String>, MenuError> {
        Ok(self.repository.unique_names().await?)
    }
}
