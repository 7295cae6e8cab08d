use async_trait::async_trait;

use crate::domain::menu::errors::MenuError;

/// Lists the unique item names present in the raw menu export.
#[async_trait]
pub trait ListExportNamesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, MenuError>;
}
