// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ErrorContext, ExportError, InfrastructureError, PresentationError,
    PresentationResult, Result, TextUtilsError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{CharCount, LineCount, Minutes, OneDecimal, ParagraphCount, SentenceCount, WordCount};
