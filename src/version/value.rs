//! Immutable `major.minor.patch` value type

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::version::error::VersionError;
use crate::version::input::VersionInput;

/// A three-component semantic version, or the invalid sentinel.
///
/// Construction never fails: malformed input yields [`SemanticVersion::INVALID`],
/// whose components all read as `-1`. Ordering is lexicographic over the raw
/// components, so the sentinel sorts before every valid version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SemanticVersion {
    components: [i64; 3],
}

/// Build a version from `input`, with `extra` supplying minor and patch when
/// `input` is a bare major number.
///
/// Any other combination of input and extra arguments is invalid.
///
/// ```
/// use semantic_version::make_version;
///
/// assert_eq!(make_version("1.2", &[]).to_string(), "1.2.0");
/// assert_eq!(make_version(1, &[2, 1]).to_string(), "1.2.1");
/// assert!(!make_version("1.2.1", &[10, 20]).is_valid());
/// ```
pub fn make_version(input: impl Into<VersionInput>, extra: &[i64]) -> SemanticVersion {
    SemanticVersion::try_parse(input, extra).unwrap_or_else(|err| {
        debug!(%err, "Falling back to invalid version");
        SemanticVersion::INVALID
    })
}

impl SemanticVersion {
    /// The shared invalid value
    pub const INVALID: SemanticVersion = SemanticVersion {
        components: [-1; 3],
    };

    /// Strict counterpart of [`make_version`] that reports why input was rejected
    pub fn try_parse(
        input: impl Into<VersionInput>,
        extra: &[i64],
    ) -> Result<SemanticVersion, VersionError> {
        input
            .into()
            .components(extra)
            .map(|components| SemanticVersion { components })
    }

    /// Shorthand for `make_version(input, &[])`
    pub fn parse(input: impl Into<VersionInput>) -> SemanticVersion {
        make_version(input, &[])
    }

    pub fn is_valid(&self) -> bool {
        self.components[0] != -1
    }

    pub fn major(&self) -> i64 {
        self.components[0]
    }

    pub fn minor(&self) -> i64 {
        self.components[1]
    }

    pub fn patch(&self) -> i64 {
        self.components[2]
    }

    pub(crate) fn components(&self) -> [i64; 3] {
        self.components
    }

    /// Components as a detached `[major, minor, patch]` list
    pub fn to_list(&self) -> Vec<i64> {
        self.components.to_vec()
    }

    /// `major.minor`
    pub fn to_short_string(&self) -> String {
        format!("{}.{}", self.major(), self.minor())
    }

    /// Convert to a [`semver::Version`], `None` for the invalid value
    pub fn to_semver(&self) -> Option<semver::Version> {
        if !self.is_valid() {
            return None;
        }
        let [major, minor, patch] = self.components.map(|c| c.unsigned_abs());
        Some(semver::Version::new(major, minor, patch))
    }

    pub fn is_same(&self, other: impl Into<VersionInput>) -> bool {
        let other = SemanticVersion::parse(other);
        self.major() == other.major()
            && self.minor() == other.minor()
            && self.patch() == other.patch()
    }

    /// True when the first differing component (major, then minor, then patch)
    /// is smaller on `self`
    pub fn is_older(&self, other: impl Into<VersionInput>) -> bool {
        let other = SemanticVersion::parse(other);
        self.components
            .iter()
            .zip(other.components.iter())
            .find(|(ours, theirs)| ours != theirs)
            .is_some_and(|(ours, theirs)| ours < theirs)
    }

    pub fn is_same_or_older(&self, other: impl Into<VersionInput>) -> bool {
        let other = SemanticVersion::parse(other);
        self.is_older(other) || self.is_same(other)
    }

    /// Mirror of [`is_older`](Self::is_older) with the operands swapped
    pub fn is_newer(&self, other: impl Into<VersionInput>) -> bool {
        SemanticVersion::parse(other).is_older(self)
    }

    pub fn is_same_or_newer(&self, other: impl Into<VersionInput>) -> bool {
        let other = SemanticVersion::parse(other);
        self.is_newer(other) || self.is_same(other)
    }
}

impl Default for SemanticVersion {
    fn default() -> Self {
        SemanticVersion::INVALID
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemanticVersion::try_parse(s, &[])
    }
}

impl Serialize for SemanticVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
