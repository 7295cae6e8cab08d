use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::password::hash_password;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

pub struct RegisterUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserUseCaseImpl {
    async fn execute(&self, params: RegisterUserParams) -> Result<User, UserError> {
        if params.username.trim().is_empty() || params.password.is_empty() {
            return Err(UserError::MissingCredentials);
        }

        if self
            .repository
            .find_by_username(&params.username)
            .await?
            .is_some()
        {
            self.logger.warn(&format!(
                "Registration rejected, username taken: {}",
                params.username
            ));
            return Err(UserError::DuplicateUsername);
        }

        let password_hash = hash_password(&params.password);
        let user = self
            .repository
            .create(&params.username, &password_hash)
            .await
            .map_err(|e| match e {
                // The unique constraint can still fire between the lookup
                // and the insert.
                RepositoryError::Duplicated => UserError::DuplicateUsername,
                other => UserError::Repository(other),
            })?;

        self.logger
            .info(&format!("Registered user {} ({})", user.username, user.id));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
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
    async fn should_register_user_and_store_a_hash() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_find_by_username()
            .returning(|_| Ok(None));
        mock_repo.expect_create().returning(|username, hash| {
            assert!(verify_password(hash, "secret"));
            Ok(User::from_repository(
                UserId::new(1),
                username.to_string(),
                hash.to_string(),
            ))
        });

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RegisterUserParams {
                username: "alice".to_string(),
                password: "secret".to_string(),
            })
            .await;

        let user = result.unwrap();
        assert_eq!(user.username, "alice");
        assert_ne!(user.password_hash, "secret");
    }

    #[tokio::test]
    async fn should_reject_duplicate_username() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_find_by_username().returning(|username| {
            Ok(Some(User::from_repository(
                UserId::new(1),
                username.to_string(),
                "sha256$x$y".to_string(),
            )))
        });

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RegisterUserParams {
                username: "alice".to_string(),
                password: "secret".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::DuplicateUsername));
    }

    #[tokio::test]
    async fn should_map_unique_violation_to_duplicate_username() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_find_by_username()
            .returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .returning(|_, _| Err(RepositoryError::Duplicated));

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RegisterUserParams {
                username: "alice".to_string(),
                password: "secret".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::DuplicateUsername));
    }

    #[tokio::test]
    async fn should_reject_missing_fields() {
        let mock_repo = MockUserRepo::new();

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RegisterUserParams {
                username: "  ".to_string(),
                password: "secret".to_string(),
            })
            .await;
        assert!(matches!(result.unwrap_err(), UserError::MissingCredentials));

        let mock_repo = MockUserRepo::new();
        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RegisterUserParams {
                username: "alice".to_string(),
                password: "".to_string(),
            })
            .await;
        assert!(matches!(result.unwrap_err(), UserError::MissingCredentials));
    }
}
