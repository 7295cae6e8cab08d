use std::env;

/// Location of the restaurant's CSV order export, the raw source the items
/// table is seeded from.
pub struct MenuConfig {
    pub export_path: String,
}

impl MenuConfig {
    /// Environment variables:
    /// - MENU_EXPORT_PATH: Path to the CSV export
    ///   (default: "restaurant-1-orders.csv")
    pub fn from_env() -> Self {
        let export_path =
            env::var("MENU_EXPORT_PATH").unwrap_or_else(|_| "restaurant-1-orders.csv".to_string());
        Self { export_path }
    }
}
