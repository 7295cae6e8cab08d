use super::errors::MenuError;

/// Port over the restaurant's raw order export (a CSV file today).
///
/// Kept separate from `MenuRepository`: the export is the seed source for
/// the store, and some listings read it directly without touching the
/// database.
pub trait MenuExportSource: Send + Sync {
    fn unique_names(&self) -> Result<Vec<String>, MenuError>;
}
