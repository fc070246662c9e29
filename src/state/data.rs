/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog and the UI layer.

/// Represents a single photo in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Position in the source list, stable for the process lifetime
    pub id: usize,
    /// URI shown before the first tap (e.g., "https://picsum.photos/id/10/400/400")
    pub primary_source: String,
    /// URI shown after an odd number of taps; equals `primary_source`
    /// when no distinct alternate was supplied
    pub fallback_source: String,
}

impl CatalogEntry {
    /// Whether this entry actually has a distinct alternate image
    pub fn has_distinct_fallback(&self) -> bool {
        self.primary_source != self.fallback_source
    }
}
