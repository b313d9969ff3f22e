//! Version tag resolution
//!
//! Maps a [`Tag`] onto exactly one entry of a catalog of published
//! versions. Components are compared as integers, so `1.10.0` ranks above
//! `1.9.0`.

use tracing::debug;

use crate::version::error::ResolveError;
use crate::version::semver::parse_release;
use crate::version::tag::{Tag, parse_tag};

/// Select the catalog entry that satisfies `tag`
///
/// # Arguments
/// * `catalog` - Published versions for one font, in any order
/// * `tag` - Parsed version selector
///
/// # Returns
/// * `Ok(String)` - The matching entry, copied verbatim from the catalog
/// * `Err(ResolveError::NotFound)` - No release entry satisfies the tag
///
/// Among several matches the numerically greatest wins. Entries that are
/// not plain `MAJOR.MINOR.PATCH` releases are never selected.
pub fn resolve<S: AsRef<str>>(catalog: &[S], tag: &Tag) -> Result<String, ResolveError> {
    catalog
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter_map(|entry| match parse_release(entry) {
            Some(parsed) => Some((entry, parsed)),
            None => {
                debug!("Skipping non-release catalog entry: {}", entry);
                None
            }
        })
        .filter(|(_, parsed)| tag.matches(parsed))
        .max_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(entry, _)| entry.to_string())
        .ok_or_else(|| ResolveError::NotFound(tag.to_string()))
}

/// Parse `tag` and resolve it against `catalog`
pub fn resolve_tag<S: AsRef<str>>(catalog: &[S], tag: &str) -> Result<String, ResolveError> {
    let parsed = parse_tag(tag)?;
    resolve(catalog, &parsed)
}
