use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    /// Inserts a new user. Fails with `Duplicated` when the username is taken.
    async fn create(&self, username: &str, password_hash: &str) -> Result<User, RepositoryError>;
    /// Overwrites the stored password hash. Fails with `NotFound` when the
    /// username does not exist.
    async fn update_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<(), RepositoryError>;
}
