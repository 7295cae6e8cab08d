use async_trait::async_trait;

use crate::domain::chat::cart::Cart;
use crate::domain::chat::errors::ChatError;

/// The caller hands in the session's cart and stores the returned one, so
/// cart state stays scoped to one session end to end.
pub struct ChatParams {
    pub message: String,
    pub cart: Cart,
}

pub struct ChatReply {
    pub reply: String,
    pub cart: Cart,
}

#[async_trait]
pub trait ChatUseCase: Send + Sync {
    async fn execute(&self, params: ChatParams) -> Result<ChatReply, ChatError>;
}
