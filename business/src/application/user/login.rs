use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::password::verify_password;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::login::{LoginParams, LoginUseCase};

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<User, UserError> {
        if params.username.trim().is_empty() || params.password.is_empty() {
            return Err(UserError::MissingCredentials);
        }

        // Unknown username and wrong password collapse into one error so the
        // response does not leak which usernames exist.
        let Some(user) = self.repository.find_by_username(&params.username).await? else {
            self.logger
                .warn(&format!("Login failed, unknown user: {}", params.username));
            return Err(UserError::InvalidCredentials);
        };

        if !verify_password(&user.password_hash, &params.password) {
            self.logger
                .warn(&format!("Login failed, bad password for {}", user.username));
            return Err(UserError::InvalidCredentials);
        }

        self.logger
            .info(&format!("User {} logged in", user.username));
        Ok(user)
    }
}
