use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::menu::errors::MenuError;
use crate::domain::menu::services::MenuExportSource;
use crate::domain::menu::use_cases::export_names::ListExportNamesUseCase;

pub struct ListExportNamesUseCaseImpl {
    pub export: Arc<dyn MenuExportSource>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListExportNamesUseCase for ListExportNamesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<String>, MenuError> {
        let names = self.export.unique_names().inspect_err(|e| {
            self.logger.error(&format!("Menu export read failed: {e}"));
        })?;
        Ok(names)
    }
}
