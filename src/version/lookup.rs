//! `id@tag` lookup against an injected catalog
//!
//! Splits the spec, fetches the font's versions from the catalog and hands
//! them to the pure resolver. This is the only place the catalog is used.

use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, info};

use crate::version::catalog::VersionCatalog;
use crate::version::error::LookupError;
use crate::version::resolver::resolve;
use crate::version::tag::{parse_tag, split_spec};

/// A successfully resolved spec
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPackage {
    pub id: String,
    pub tag: String,
    pub version: String,
}

pub struct VersionLookup {
    catalog: Arc<dyn VersionCatalog>,
}

impl VersionLookup {
    pub fn new(catalog: Arc<dyn VersionCatalog>) -> Self {
        Self { catalog }
    }

    /// Resolve a single `id@tag` spec
    pub async fn lookup(&self, spec: &str) -> Result<ResolvedPackage, LookupError> {
        let spec = split_spec(spec)?;
        // Reject malformed tags before touching the catalog
        let tag = parse_tag(&spec.tag)?;

        debug!("Fetching versions for {}", spec.id);
        let versions = self.catalog.fetch_versions(&spec.id).await?;

        let version = resolve(&versions, &tag)?;
        info!("Resolved {}@{} to {}", spec.id, spec.tag, version);

        Ok(ResolvedPackage {
            id: spec.id,
            tag: spec.tag,
            version,
        })
    }

    /// Resolve many specs concurrently, returning results in input order
    pub async fn lookup_all<S: AsRef<str>>(
        &self,
        specs: &[S],
    ) -> Vec<Result<ResolvedPackage, LookupError>> {
        join_all(specs.iter().map(|spec| self.lookup(spec.as_ref()))).await
    }
}
