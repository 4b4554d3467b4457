//! Value objects shared with the kernel crate.

pub use textutils_shared_kernel::value_objects::{
    CharCount, LineCount, Minutes, OneDecimal, ParagraphCount, SentenceCount, WordCount,
};
