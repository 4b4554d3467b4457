//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`exporter`]: builds text and JSON export payloads from a text
//! - [`session`]: caller-held text buffer with analysis and transforms
//! - [`dto`]: payload and document types crossing the use case boundary
//! - [`stamp`]: timestamp and file name formatting
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod exporter;
pub mod session;
pub mod stamp;

pub use dto::{ExportKind, ExportPayload, GENERATOR, StructuredDocument};
pub use exporter::ReportExporter;
pub use session::TextSession;
