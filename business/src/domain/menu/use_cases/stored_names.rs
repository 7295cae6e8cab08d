use async_trait::async_trait;

use crate::domain::menu::errors::MenuError;

/// Lists the distinct item names present in the store.
#[async_trait]
pub trait ListStoredNamesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, MenuError>;
}
