use serde::Deserialize;
use serde_json::Value;

/// Tabular shift catalog: named headers plus rows of positional values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub catalog_headers: Vec<CatalogHeader>,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogHeader {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogItem {
    #[serde(default)]
    pub item_id: Option<i64>,
    #[serde(default)]
    pub values: Vec<Value>,
}

impl Catalog {
    /// Position of the column whose header matches `name`
    /// (trimmed, case-insensitive).
    pub fn column(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.catalog_headers
            .iter()
            .position(|h| h.name.trim().to_lowercase() == wanted)
    }
}
