// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod estimates;

pub use counts::{CharCount, LineCount, ParagraphCount, SentenceCount, WordCount};
pub use estimates::{Minutes, OneDecimal};
