use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct ChatRequest {
    /// Free-text user message
    pub message: String,
}

#[derive(Debug, Clone, Object)]
pub struct ChatReplyResponse {
    pub reply: String,
}
