/// A menu entry seeded from the restaurant's order export.
///
/// `popularity` is a stored counter intended to drive recommendations. No
/// code path increments it yet, so the top-N ranking is static until real
/// usage data is written back.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub popularity: i64,
}

impl MenuItem {
    pub fn from_repository(id: i64, name: String, price: f64, popularity: i64) -> Self {
        Self {
            id,
            name,
            price,
            popularity,
        }
    }
}
