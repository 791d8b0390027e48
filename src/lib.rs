pub mod cli;
pub mod config;
pub mod version;

pub use version::compare::{compare, compare_by_latest, is_valid};
pub use version::error::VersionError;
pub use version::input::VersionInput;
pub use version::value::{SemanticVersion, make_version};
