use std::sync::Arc;

use poem::session::Session;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::errors::UserError;
use business::domain::user::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};
use business::domain::user::use_cases::reset_password::{
    ResetPasswordParams, ResetPasswordUseCase,
};

use crate::api::auth::dto::{LoginRequest, RegisterRequest, ResetPasswordRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse, MessageResponse};
use crate::api::security::store_session_user;
use crate::api::tags::ApiTags;

pub struct AuthApi {
    register_use_case: Arc<dyn RegisterUserUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
    reset_password_use_case: Arc<dyn ResetPasswordUseCase>,
}

impl AuthApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUserUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
        reset_password_use_case: Arc<dyn ResetPasswordUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
            reset_password_use_case,
        }
    }
}

/// Account API
///
/// Registration, login, logout, and password reset.
#[OpenApi]
impl AuthApi {
    /// Register a new account
    #[oai(path = "/register", method = "post", tag = "ApiTags::Auth")]
    async fn register(&self, body: Json<RegisterRequest>) -> RegisterResponse {
        let params = RegisterUserParams {
            username: body.0.username,
            password: body.0.password,
        };

        match self.register_use_case.execute(params).await {
            Ok(_) => RegisterResponse::Created(MessageResponse::new("Registration successful!")),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterResponse::BadRequest(json),
                    _ => RegisterResponse::InternalError(json),
                }
            }
        }
    }

    /// Log in
    ///
    /// On success the user id is stored in the session and the browser is
    /// sent on to the chat page.
    #[oai(path = "/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, session: &Session, body: Json<LoginRequest>) -> LoginResponse {
        let params = LoginParams {
            username: body.0.username,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(user) => {
                store_session_user(session, user.id);
                LoginResponse::Redirect("/chatbot".to_string())
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => LoginResponse::BadRequest(json),
                    401 => LoginResponse::Unauthorized(json),
                    _ => LoginResponse::InternalError(json),
                }
            }
        }
    }

    /// Reset a forgotten password
    ///
    /// Always answers 200 with a message; an unknown username is reported
    /// in the message body, not the status code.
    #[oai(path = "/forgot-password", method = "post", tag = "ApiTags::Auth")]
    async fn forgot_password(&self, body: Json<ResetPasswordRequest>) -> ForgotPasswordResponse {
        let params = ResetPasswordParams {
            username: body.0.username,
            new_password: body.0.new_password,
        };

        match self.reset_password_use_case.execute(params).await {
            Ok(()) => ForgotPasswordResponse::Ok(MessageResponse::new(
                "Password has been reset successfully.",
            )),
            Err(UserError::NotFound) => {
                ForgotPasswordResponse::Ok(MessageResponse::new("Username not found."))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ForgotPasswordResponse::BadRequest(json),
                    _ => ForgotPasswordResponse::InternalError(json),
                }
            }
        }
    }

    /// Log out
    ///
    /// Drops the whole session, cart included, and redirects home.
    #[oai(path = "/logout", method = "get", tag = "ApiTags::Auth")]
    async fn logout(&self, session: &Session) -> LogoutResponse {
        session.purge();
        LogoutResponse::Redirect("/".to_string())
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterResponse {
    #[oai(status = 201)]
    Created(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 302)]
    Redirect(#[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ForgotPasswordResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LogoutResponse {
    #[oai(status = 302)]
    Redirect(#[oai(header = "Location")] String),
}
