//! Version tag classification
//!
//! A tag is the version half of a `id@tag` spec:
//! - `latest` - greatest published version
//! - `1.2.3` - exact version
//! - `1.2` - greatest patch within 1.2
//! - `1` - greatest minor.patch within 1

use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::version::error::{ResolveError, SpecError};
use crate::version::semver::parse_component;

const LATEST: &str = "latest";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Latest,
    Full { major: u64, minor: u64, patch: u64 },
    Partial { major: u64, minor: u64 },
    Major(u64),
}

impl Tag {
    /// Whether a release version satisfies this tag
    pub fn matches(&self, version: &Version) -> bool {
        match *self {
            Tag::Latest => true,
            Tag::Full {
                major,
                minor,
                patch,
            } => version.major == major && version.minor == minor && version.patch == patch,
            Tag::Partial { major, minor } => version.major == major && version.minor == minor,
            Tag::Major(major) => version.major == major,
        }
    }

    /// Short name of the tag shape
    pub fn kind(&self) -> &'static str {
        match self {
            Tag::Latest => "latest",
            Tag::Full { .. } => "full",
            Tag::Partial { .. } => "partial",
            Tag::Major(_) => "major",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Latest => f.write_str(LATEST),
            Tag::Full {
                major,
                minor,
                patch,
            } => write!(f, "{major}.{minor}.{patch}"),
            Tag::Partial { major, minor } => write!(f, "{major}.{minor}"),
            Tag::Major(major) => write!(f, "{major}"),
        }
    }
}

impl FromStr for Tag {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag(s)
    }
}

/// Classify a version tag by its dot-separated components
pub fn parse_tag(tag: &str) -> Result<Tag, ResolveError> {
    if tag == LATEST {
        return Ok(Tag::Latest);
    }

    let invalid = || ResolveError::InvalidTag(tag.to_string());

    let components = tag
        .split('.')
        .map(parse_component)
        .collect::<Option<Vec<u64>>>()
        .ok_or_else(invalid)?;

    match components.as_slice() {
        [major] => Ok(Tag::Major(*major)),
        [major, minor] => Ok(Tag::Partial {
            major: *major,
            minor: *minor,
        }),
        [major, minor, patch] => Ok(Tag::Full {
            major: *major,
            minor: *minor,
            patch: *patch,
        }),
        _ => Err(invalid()),
    }
}

/// A font id paired with its unvalidated version tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    pub id: String,
    pub tag: String,
}

/// Split `roboto@1.2` into id and tag on the first `@`
pub fn split_spec(spec: &str) -> Result<PackageSpec, SpecError> {
    let (id, tag) = spec.split_once('@').unwrap_or((spec, ""));

    if id.is_empty() {
        return Err(SpecError::MissingId(spec.to_string()));
    }
    if tag.is_empty() {
        return Err(SpecError::MissingTag(spec.to_string()));
    }

    Ok(PackageSpec {
        id: id.to_string(),
        tag: tag.to_string(),
    })
}
