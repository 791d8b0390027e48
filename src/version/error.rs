use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("No version input given")]
    MissingInput,

    #[error("No leading version number in {0:?}")]
    NoMatch(String),

    #[error("Wildcard is not a concrete version: {0:?}")]
    Wildcard(String),

    #[error("Negative version component: {0}")]
    Negative(i64),

    #[error("Expected 1 to 3 version components, got {0}")]
    ComponentCount(usize),

    #[error("Version component out of range: {0}")]
    Overflow(String),

    #[error("Source version is invalid")]
    InvalidSource,

    #[error("Extra arguments {0:?} cannot be mixed with a string, list or version input")]
    MixedArguments(Vec<i64>),
}
