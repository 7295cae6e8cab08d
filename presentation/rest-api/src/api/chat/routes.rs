use std::sync::Arc;

use poem::session::Session;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::chat::use_cases::respond::{ChatParams, ChatUseCase};

use crate::api::chat::dto::{ChatRequest, ChatReplyResponse};
use crate::api::error::ErrorResponse;
use crate::api::security::{session_cart, store_session_cart};
use crate::api::tags::ApiTags;

pub struct ChatApi {
    chat_use_case: Arc<dyn ChatUseCase>,
}

impl ChatApi {
    pub fn new(chat_use_case: Arc<dyn ChatUseCase>) -> Self {
        Self { chat_use_case }
    }
}

/// Chat API
///
/// Keyword-driven assistant. No login required; the cart rides on the
/// session cookie, so each visitor builds their own.
#[OpenApi]
impl ChatApi {
    /// Send a chat message
    #[oai(path = "/chat", method = "post", tag = "ApiTags::Chat")]
    async fn chat(&self, session: &Session, body: Json<ChatRequest>) -> ChatResponse {
        let params = ChatParams {
            message: body.0.message,
            cart: session_cart(session),
        };

        match self.chat_use_case.execute(params).await {
            Ok(reply) => {
                store_session_cart(session, &reply.cart);
                ChatResponse::Ok(Json(ChatReplyResponse { reply: reply.reply }))
            }
            Err(err) => ChatResponse::InternalError(Json(ErrorResponse {
                name: "InternalError".to_string(),
                message: err.to_string(),
            })),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ChatResponse {
    #[oai(status = 200)]
    Ok(Json<ChatReplyResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
