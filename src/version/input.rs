//! Accepted input shapes for building a [`SemanticVersion`]
//!
//! Every shape converts into [`VersionInput`], so constructors and comparison
//! methods take `impl Into<VersionInput>`:
//! - `"1.2.3"`, `String` - leading `major.minor.patch` text
//! - `1` (`i64`) - major, with minor/patch passed as extra arguments
//! - `[1, 2, 3]`, `vec![1, 2]`, `&[i64]` slices - component list
//! - `SemanticVersion`, `semver::Version` - existing versions

use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::VersionError;
use crate::version::value::SemanticVersion;

/// Leading `major.minor.patch` where only the last group is required
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+\.)?([0-9]+\.)?(\*|[0-9]+)").unwrap());

/// Input accepted by [`make_version`](crate::version::value::make_version)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VersionInput {
    /// No argument at all
    #[default]
    Missing,
    /// Version text such as `1.2.3` or `1.2`
    Text(String),
    /// Major component, followed by minor and patch as extra arguments
    Number(i64),
    /// One to three components
    List(Vec<i64>),
    /// An already constructed version
    Version(SemanticVersion),
}

impl VersionInput {
    /// Resolve this input plus extra positional numbers into a normalized triple.
    ///
    /// Extra numbers are only allowed after a [`VersionInput::Number`].
    pub(crate) fn components(&self, extra: &[i64]) -> Result<[i64; 3], VersionError> {
        match self {
            VersionInput::Missing => Err(VersionError::MissingInput),
            VersionInput::Number(major) => {
                let mut parts = Vec::with_capacity(extra.len() + 1);
                parts.push(*major);
                parts.extend_from_slice(extra);
                normalize(&parts)
            }
            _ if !extra.is_empty() => Err(VersionError::MixedArguments(extra.to_vec())),
            VersionInput::Text(text) => parse_text(text),
            VersionInput::List(parts) => normalize(parts),
            VersionInput::Version(version) if version.is_valid() => Ok(version.components()),
            VersionInput::Version(_) => Err(VersionError::InvalidSource),
        }
    }
}

fn parse_text(text: &str) -> Result<[i64; 3], VersionError> {
    let Some(matched) = VERSION_RE.find(text) else {
        return Err(VersionError::NoMatch(text.to_string()));
    };

    let parts = matched
        .as_str()
        .split('.')
        .map(|group| match group {
            "*" => Err(VersionError::Wildcard(text.to_string())),
            _ => group
                .parse::<i64>()
                .map_err(|_| VersionError::Overflow(group.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    normalize(&parts)
}

/// Pad missing trailing components with zero after validating them.
fn normalize(parts: &[i64]) -> Result<[i64; 3], VersionError> {
    if parts.is_empty() || parts.len() > 3 {
        return Err(VersionError::ComponentCount(parts.len()));
    }
    if let Some(&negative) = parts.iter().find(|&&part| part < 0) {
        return Err(VersionError::Negative(negative));
    }

    let mut components = [0; 3];
    components[..parts.len()].copy_from_slice(parts);
    Ok(components)
}

impl From<&str> for VersionInput {
    fn from(text: &str) -> Self {
        VersionInput::Text(text.to_string())
    }
}

impl From<String> for VersionInput {
    fn from(text: String) -> Self {
        VersionInput::Text(text)
    }
}

impl From<&String> for VersionInput {
    fn from(text: &String) -> Self {
        VersionInput::Text(text.clone())
    }
}

impl From<i64> for VersionInput {
    fn from(major: i64) -> Self {
        VersionInput::Number(major)
    }
}

impl From<Vec<i64>> for VersionInput {
    fn from(parts: Vec<i64>) -> Self {
        VersionInput::List(parts)
    }
}

impl From<&[i64]> for VersionInput {
    fn from(parts: &[i64]) -> Self {
        VersionInput::List(parts.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for VersionInput {
    fn from(parts: [i64; N]) -> Self {
        VersionInput::List(parts.to_vec())
    }
}

impl From<SemanticVersion> for VersionInput {
    fn from(version: SemanticVersion) -> Self {
        VersionInput::Version(version)
    }
}

impl From<&SemanticVersion> for VersionInput {
    fn from(version: &SemanticVersion) -> Self {
        VersionInput::Version(*version)
    }
}

/// Pre-release and build metadata are dropped; components above `i64::MAX`
/// make the resulting version invalid.
impl From<&semver::Version> for VersionInput {
    fn from(version: &semver::Version) -> Self {
        let parts = [version.major, version.minor, version.patch]
            .into_iter()
            .map(i64::try_from)
            .collect::<Result<Vec<_>, _>>();

        match parts {
            Ok(parts) => VersionInput::List(parts),
            // Falls through to the overflow check of the text parser
            Err(_) => VersionInput::Text(format!(
                "{}.{}.{}",
                version.major, version.minor, version.patch
            )),
        }
    }
}

impl From<semver::Version> for VersionInput {
    fn from(version: semver::Version) -> Self {
        VersionInput::from(&version)
    }
}
