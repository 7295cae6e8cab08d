use async_trait::async_trait;
use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;
use business::domain::menu::model::MenuItem;
use business::domain::menu::repository::MenuRepository;

use crate::db::map_sqlx_err;

use super::entity::MenuItemEntity;

pub struct MenuRepositorySqlite {
    pool: SqlitePool,
}

impl MenuRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuRepository for MenuRepositorySqlite {
    async fn get_all(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, MenuItemEntity>(
            "SELECT item_id, name, price, popularity FROM items ORDER BY item_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<MenuItem>, RepositoryError> {
        let entity = sqlx::query_as::<_, MenuItemEntity>(
            "SELECT item_id, name, price, popularity FROM items WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find_by_name_ignoring_case(
        &self,
        name: &str,
    ) -> Result<Option<MenuItem>, RepositoryError> {
        let entity = sqlx::query_as::<_, MenuItemEntity>(
            "SELECT item_id, name, price, popularity FROM items WHERE LOWER(name) = LOWER(?)",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn top_by_popularity(&self, limit: i64) -> Result<Vec<MenuItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, MenuItemEntity>(
            "SELECT item_id, name, price, popularity FROM items ORDER BY popularity DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn unique_names(&self) -> Result<Vec<String>, RepositoryError> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT name FROM items")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_err)
    }
}
