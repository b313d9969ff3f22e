//! Version tag resolution for font packages
//!
//! Resolves a user-supplied tag (`latest`, `1`, `1.2`, `1.2.3`) to exactly
//! one published version of a font.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Lookup   │────▶│   Catalog   │     │  Resolver   │
//! │  (id@tag)   │     │   (fetch)   │     │   (pure)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │                   ▲
//!        ▼                   ▼                   │
//! ┌─────────────┐     ┌─────────────┐            │
//! │     Tag     │     │  Catalogs   │            │
//! │  (classify) │     │ (memory,fs) │            │
//! └─────────────┘     └─────────────┘            │
//!        └───────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`resolver`]: Pure tag -> version selection over a catalog
//! - [`tag`]: Tag classification and `id@tag` splitting
//! - [`catalog`]: Catalog trait for fetching a font's published versions
//! - [`catalogs`]: Concrete catalogs (in-memory, JSON directory)
//! - [`lookup`]: Split, fetch and resolve in one call
//! - [`error`]: Error types with HTTP-style status codes
//! - [`semver`]: Numeric version parsing helpers

pub mod catalog;
pub mod catalogs;
pub mod error;
pub mod lookup;
pub mod resolver;
pub mod semver;
pub mod tag;
