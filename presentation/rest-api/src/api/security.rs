use poem::session::Session;

use business::domain::chat::cart::Cart;
use business::domain::shared::value_objects::UserId;

const USER_ID_KEY: &str = "user_id";
const CART_KEY: &str = "cart";

/// The logged-in user for this session, if any. Protected endpoints turn
/// `None` into a 401.
pub fn session_user(session: &Session) -> Option<UserId> {
    session.get::<i64>(USER_ID_KEY).map(UserId::new)
}

pub fn store_session_user(session: &Session, user_id: UserId) {
    session.set(USER_ID_KEY, user_id.value());
}

/// The chat cart accumulated in this session. A fresh session starts with
/// an empty cart; carts are never shared across sessions.
pub fn session_cart(session: &Session) -> Cart {
    session.get::<Cart>(CART_KEY).unwrap_or_default()
}

pub fn store_session_cart(session: &Session, cart: &Cart) {
    session.set(CART_KEY, cart);
}
