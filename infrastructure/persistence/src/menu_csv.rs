use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::error;

use business::domain::menu::errors::MenuError;
use business::domain::menu::services::MenuExportSource;

/// One row of the restaurant's order export. The export carries one row per
/// ordered line, so item names and prices repeat heavily.
#[derive(Debug, Deserialize)]
struct MenuExportRow {
    #[serde(rename = "Item Name")]
    item_name: String,
    #[serde(rename = "Product Price")]
    product_price: f64,
}

/// CSV-file adapter for the `MenuExportSource` port, and the seed source
/// for the items table.
pub struct CsvMenuExport {
    path: PathBuf,
}

impl CsvMenuExport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Unique (name, price) pairs in first-seen order, for seeding.
    pub fn menu_items(&self) -> Result<Vec<(String, f64)>, MenuError> {
        read_menu_items(self.open()?)
    }

    fn open(&self) -> Result<File, MenuError> {
        File::open(&self.path).map_err(|e| {
            error!("Cannot open menu export {}: {e}", self.path.display());
            MenuError::ExportUnavailable
        })
    }
}

impl MenuExportSource for CsvMenuExport {
    fn unique_names(&self) -> Result<Vec<String>, MenuError> {
        read_unique_names(self.open()?)
    }
}

fn read_menu_items<R: Read>(reader: R) -> Result<Vec<(String, f64)>, MenuError> {
    let mut seen = HashSet::new();
    let mut items = Vec::new();
    for row in csv::Reader::from_reader(reader).deserialize::<MenuExportRow>() {
        let row = row.map_err(|e| {
            error!("Malformed menu export row: {e}");
            MenuError::ExportUnavailable
        })?;
        if seen.insert((row.item_name.clone(), row.product_price.to_bits())) {
            items.push((row.item_name, row.product_price));
        }
    }
    Ok(items)
}

fn read_unique_names<R: Read>(reader: R) -> Result<Vec<String>, MenuError> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for row in csv::Reader::from_reader(reader).deserialize::<MenuExportRow>() {
        let row = row.map_err(|e| {
            error!("Malformed menu export row: {e}");
            MenuError::ExportUnavailable
        })?;
        if seen.insert(row.item_name.clone()) {
            names.push(row.item_name);
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Order Number,Item Name,Quantity,Product Price
1,Plain Papadum,2,0.80
1,Chicken Tikka Masala,1,8.95
2,Plain Papadum,1,0.80
2,Pilau Rice,1,2.95
";

    #[test]
    fn should_deduplicate_seed_pairs_in_first_seen_order() {
        let items = read_menu_items(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            items,
            vec![
                ("Plain Papadum".to_string(), 0.80),
                ("Chicken Tikka Masala".to_string(), 8.95),
                ("Pilau Rice".to_string(), 2.95),
            ]
        );
    }

    #[test]
    fn should_list_unique_names() {
        let names = read_unique_names(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            names,
            vec!["Plain Papadum", "Chicken Tikka Masala", "Pilau Rice"]
        );
    }

    #[test]
    fn should_reject_rows_with_non_numeric_prices() {
        let malformed = "Item Name,Product Price\nBurger,five\n";
        assert!(matches!(
            read_menu_items(malformed.as_bytes()),
            Err(MenuError::ExportUnavailable)
        ));
    }

    #[test]
    fn should_fail_when_the_file_is_missing() {
        let export = CsvMenuExport::new("/definitely/not/here.csv");
        assert!(matches!(
            export.unique_names(),
            Err(MenuError::ExportUnavailable)
        ));
    }
}
