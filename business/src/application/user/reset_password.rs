use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::password::hash_password;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::reset_password::{ResetPasswordParams, ResetPasswordUseCase};

pub struct ResetPasswordUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResetPasswordUseCase for ResetPasswordUseCaseImpl {
    async fn execute(&self, params: ResetPasswordParams) -> Result<(), UserError> {
        if params.username.trim().is_empty() || params.new_password.is_empty() {
            return Err(UserError::MissingCredentials);
        }

        // Reset stores the same salted hash format as registration. Nothing
        // ever writes a plaintext password.
        let password_hash = hash_password(&params.new_password);
        self.repository
            .update_password(&params.username, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;

        self.logger
            .info(&format!("Password reset for {}", params.username));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::model::User;
    use crate::domain::user::password::verify_password;
    use mockall::mock;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
            async fn create(&self, username: &str, password_hash: &str) -> Result<User, RepositoryError>;
            async fn update_password(&self, username: &str, password_hash: &str) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_store_a_hash_of_the_new_password() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_update_password()
            .withf(|username, hash| {
                username == "alice" && verify_password(hash, "new-secret")
            })
            .returning(|_, _| Ok(()));

        let use_case = ResetPasswordUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResetPasswordParams {
                username: "alice".to_string(),
                new_password: "new-secret".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_report_unknown_username() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_update_password()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = ResetPasswordUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResetPasswordParams {
                username: "nobody".to_string(),
                new_password: "new-secret".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::NotFound));
    }
}
