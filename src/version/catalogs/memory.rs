//! In-memory catalog

use std::collections::HashMap;

use crate::version::catalog::VersionCatalog;
use crate::version::error::CatalogError;

/// Catalog backed by a fixed map of font id to versions
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    versions: HashMap<String, Vec<String>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_versions(mut self, id: &str, versions: Vec<&str>) -> Self {
        self.versions.insert(
            id.to_string(),
            versions.into_iter().map(|v| v.to_string()).collect(),
        );
        self
    }
}

#[async_trait::async_trait]
impl VersionCatalog for InMemoryCatalog {
    async fn fetch_versions(&self, id: &str) -> Result<Vec<String>, CatalogError> {
        self.versions
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_versions_returns_registered_versions() {
        let catalog = InMemoryCatalog::new().with_versions("roboto", vec!["5.0.8", "4.5.0"]);

        let versions = catalog.fetch_versions("roboto").await.unwrap();

        assert_eq!(versions, vec!["5.0.8".to_string(), "4.5.0".to_string()]);
    }

    #[tokio::test]
    async fn fetch_versions_returns_not_found_for_unknown_id() {
        let catalog = InMemoryCatalog::new();

        let result = catalog.fetch_versions("inter").await;

        assert!(matches!(result, Err(CatalogError::NotFound(id)) if id == "inter"));
    }
}
