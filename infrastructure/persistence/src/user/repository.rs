use async_trait::async_trait;
use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

use crate::db::map_sqlx_err;

use super::entity::UserEntity;

pub struct UserRepositorySqlite {
    pool: SqlitePool,
}

impl UserRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositorySqlite {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(
            "SELECT user_id, username, password FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn create(&self, username: &str, password_hash: &str) -> Result<User, RepositoryError> {
        let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(User::from_repository(
            UserId::new(result.last_insert_rowid()),
            username.to_string(),
            password_hash.to_string(),
        ))
    }

    async fn update_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE users SET password = ? WHERE username = ?")
            .bind(password_hash)
            .bind(username)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
