use serde::{Deserialize, Serialize};

/// Represents a user identifier (database rowid).
/// Used to scope orders, bills, and sessions to one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw database identifier.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_raw_id() {
        let user_id = UserId::new(42);
        assert_eq!(user_id.value(), 42);
    }

    #[test]
    fn should_display_user_id() {
        let user_id = UserId::new(7);
        assert_eq!(format!("{}", user_id), "7");
    }

    #[test]
    fn should_compare_user_ids_for_equality() {
        assert_eq!(UserId::new(1), UserId::from(1));
        assert_ne!(UserId::new(1), UserId::new(2));
    }

    #[test]
    fn should_round_trip_through_serde() {
        let user_id = UserId::new(99);
        let json = serde_json::to_string(&user_id).unwrap();
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(user_id, back);
    }
}
