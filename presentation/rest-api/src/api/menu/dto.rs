use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct RecommendRequest {
    /// Item the user is looking at. Required by the endpoint contract even
    /// though the current popularity ranking does not use it.
    pub selected_item: String,
}

#[derive(Debug, Clone, Object)]
pub struct RecommendResponse {
    /// Item names, most popular first, at most five
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ExportNamesResponse {
    /// Unique item names found in the CSV export
    pub unique_values: Vec<String>,
}

#[derive(Debug, Clone, Object)]
pub struct StoredNamesResponse {
    /// Distinct item names in the items table
    pub unique_items: Vec<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UniqueValuesResponse {
    pub csv_unique_values: Vec<String>,
    pub db_unique_values: Vec<String>,
}
