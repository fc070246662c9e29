use super::data::CatalogEntry;

/// The Catalog is the ordered, read-only list of photos shown in the grid.
/// It pairs each primary source with a fallback source by position.
///
/// There is no way to add, remove or reorder entries once it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from two source lists paired by index.
    ///
    /// Positions past the end of `fallback`, and positions whose fallback is
    /// an empty string, fall back to their own primary source.
    pub fn from_sources<P, F>(primary: P, fallback: F) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        let mut fallback = fallback.into_iter();

        let entries = primary
            .into_iter()
            .enumerate()
            .map(|(id, primary_source)| {
                let primary_source = primary_source.into();
                let fallback_source = fallback
                    .next()
                    .map(Into::into)
                    .filter(|s: &String| !s.trim().is_empty())
                    .unwrap_or_else(|| primary_source.clone());

                CatalogEntry {
                    id,
                    primary_source,
                    fallback_source,
                }
            })
            .collect();

        Catalog { entries }
    }

    /// All entries in source order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of photos in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
