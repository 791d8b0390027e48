//! Semantic version parsing and ordering
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌─────────────┐
//! │ VersionInput │────▶│ SemanticVersion  │◀────│   compare   │
//! │ (str, list,  │     │ (major.minor.    │     │ (sort, is_  │
//! │  number)     │     │  patch/invalid)  │     │  valid)     │
//! └──────────────┘     └──────────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`input`]: Accepted input shapes and their normalization rules
//! - [`value`]: The immutable `SemanticVersion` and its comparisons
//! - [`compare`]: Free comparator functions suitable for sorting
//! - [`error`]: Reasons an input is rejected

pub mod compare;
pub mod error;
pub mod input;
pub mod value;
