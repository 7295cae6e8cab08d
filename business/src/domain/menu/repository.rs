use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::MenuItem;

#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<MenuItem>, RepositoryError>;
    /// Exact-name lookup, used when placing orders.
    async fn find_by_name(&self, name: &str) -> Result<Option<MenuItem>, RepositoryError>;
    /// Case-insensitive lookup, used when pricing chat carts.
    async fn find_by_name_ignoring_case(
        &self,
        name: &str,
    ) -> Result<Option<MenuItem>, RepositoryError>;
    async fn top_by_popularity(&self, limit: i64) -> Result<Vec<MenuItem>, RepositoryError>;
    async fn unique_names(&self) -> Result<Vec<String>, RepositoryError>;
}
