//! # Domain
//!
//! Pure text statistics and transformations.
//!
//! - [`analysis`]: the statistics engine ([`analysis::analyze`])
//! - [`model`]: the [`model::Report`] snapshot and word frequency table
//! - [`transform`]: case conversion and clearing
//!
//! Nothing in this crate performs I/O.

#![allow(clippy::multiple_crate_versions)]

pub mod analysis;
pub mod model;
pub mod transform;
pub mod value_objects;

pub use analysis::analyze;
pub use model::{PLACEHOLDER_TEXT, Report, WordFrequency, is_blank_or_placeholder};
pub use transform::Transform;
