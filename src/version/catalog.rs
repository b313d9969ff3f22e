//! Catalog trait for fetching the published versions of a font

#[cfg(test)]
use mockall::automock;

use crate::version::error::CatalogError;

/// Source of published versions, injected into [`VersionLookup`]
///
/// [`VersionLookup`]: crate::version::lookup::VersionLookup
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionCatalog: Send + Sync {
    /// Fetches every published version of a font
    ///
    /// # Arguments
    /// * `id` - The font id (e.g., "roboto")
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Version strings in no particular order
    /// * `Err(CatalogError::NotFound)` - If the font is unknown
    async fn fetch_versions(&self, id: &str) -> Result<Vec<String>, CatalogError>;
}
