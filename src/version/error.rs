use thiserror::Error;

/// Failure of tag classification or selection against a catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("Version not found: {0}")]
    NotFound(String),
}

impl ResolveError {
    pub fn status_code(&self) -> u16 {
        match self {
            ResolveError::InvalidTag(_) => 400,
            ResolveError::NotFound(_) => 404,
        }
    }
}

/// Failure to split a combined `id@tag` spec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("Unable to parse font id from spec: {0:?}")]
    MissingId(String),

    #[error("Unable to parse version tag from spec: {0:?}")]
    MissingTag(String),
}

impl SpecError {
    pub fn status_code(&self) -> u16 {
        400
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Font not found: {0}")]
    NotFound(String),

    #[error("Invalid catalog: {0}")]
    InvalidResponse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::NotFound(_) => 404,
            CatalogError::InvalidResponse(_) | CatalogError::Io(_) => 500,
        }
    }
}

/// Any failure along split -> fetch -> resolve
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl LookupError {
    /// HTTP-style status an outer layer would surface this failure as
    pub fn status_code(&self) -> u16 {
        match self {
            LookupError::Spec(e) => e.status_code(),
            LookupError::Catalog(e) => e.status_code(),
            LookupError::Resolve(e) => e.status_code(),
        }
    }
}
