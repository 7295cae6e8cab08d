use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct RegisterRequest {
    /// Desired username (must be unused)
    pub username: String,
    /// Password, stored only as a salted hash
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct ResetPasswordRequest {
    pub username: String,
    /// Replacement password, hashed exactly like a registration password
    pub new_password: String,
}
