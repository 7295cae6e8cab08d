use serde::{Deserialize, Serialize};

/// Transient item-name → quantity collection built up over a chat session.
///
/// Owned by the caller's session state, never shared between sessions. Keeps
/// insertion order so replies list items in the order they were mentioned.
/// Names are stored as typed: nothing checks them against the menu here, and
/// unknown names simply price at zero when the bill is computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub name: String,
    pub quantity: i64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of the named item.
    pub fn add(&mut self, name: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.quantity += 1;
        } else {
            self.entries.push(CartEntry {
                name: name.to_string(),
                quantity: 1,
            });
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_empty() {
        assert!(Cart::new().is_empty());
    }

    #[test]
    fn should_increment_quantity_for_repeated_items() {
        let mut cart = Cart::new();
        cart.add("burger");
        cart.add("fries");
        cart.add("burger");

        let entries: Vec<_> = cart.entries().cloned().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "burger");
        assert_eq!(entries[0].quantity, 2);
        assert_eq!(entries[1].name, "fries");
        assert_eq!(entries[1].quantity, 1);
    }

    #[test]
    fn should_survive_session_serialization() {
        let mut cart = Cart::new();
        cart.add("pilau rice");
        cart.add("pilau rice");

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(cart, back);
    }
}
