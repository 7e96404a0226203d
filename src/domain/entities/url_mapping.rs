//! URL mapping entity: the only record the service persists.

/// A stored alias → URL mapping.
///
/// Mappings are immutable once created; they can only be inserted and deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub alias: String,
    pub url: String,
}

impl NewUrlMapping {
    /// Attaches the store-assigned id, producing the persisted mapping.
    pub fn into_mapping(self, id: i64) -> UrlMapping {
        UrlMapping::new(id, self.alias, self.url)
    }
}
