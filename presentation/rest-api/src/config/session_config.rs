use poem::session::{CookieConfig, MemoryStorage, ServerSession};

/// Builds the server-side session layer.
///
/// Sessions carry the logged-in user id and the chat cart, keyed by a
/// cookie. Storage is in-memory: sessions and carts reset on process
/// restart, and each browser session gets its own isolated cart.
pub fn init_session() -> ServerSession<MemoryStorage> {
    ServerSession::new(CookieConfig::default().name("session"), MemoryStorage::new())
}
