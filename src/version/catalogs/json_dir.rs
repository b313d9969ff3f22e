//! Catalog read from a directory of jsDelivr-style package listings
//!
//! Each font is stored as `<dir>/<id>.json`:
//!
//! ```json
//! { "versions": [ { "version": "5.0.8" }, { "version": "5.0.7" } ] }
//! ```

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::version::catalog::VersionCatalog;
use crate::version::error::CatalogError;

/// Package listing document
#[derive(Debug, Deserialize)]
struct PackageListing {
    versions: Option<Vec<ListedVersion>>,
}

#[derive(Debug, Deserialize)]
struct ListedVersion {
    version: String,
}

pub struct JsonDirCatalog {
    dir: PathBuf,
}

impl JsonDirCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the listing for `id`, or None if the id would escape the directory
    fn listing_path(&self, id: &str) -> Option<PathBuf> {
        if id.is_empty() || id.starts_with('.') || id.contains(['/', '\\']) {
            return None;
        }
        Some(self.dir.join(format!("{id}.json")))
    }
}

#[async_trait::async_trait]
impl VersionCatalog for JsonDirCatalog {
    async fn fetch_versions(&self, id: &str) -> Result<Vec<String>, CatalogError> {
        let Some(path) = self.listing_path(id) else {
            debug!("Rejecting font id that is not a plain file name: {:?}", id);
            return Err(CatalogError::NotFound(id.to_string()));
        };

        debug!("Reading catalog listing: {:?}", path);

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CatalogError::NotFound(id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let listing: PackageListing = serde_json::from_str(&content).map_err(|e| {
            warn!("Failed to parse catalog listing {:?}: {}", path, e);
            CatalogError::InvalidResponse(format!("{}: {}", path.display(), e))
        })?;

        let versions = listing
            .versions
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        Ok(versions.into_iter().map(|v| v.version).collect())
    }
}
