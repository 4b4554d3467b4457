// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod clock;
pub mod delivery;
pub mod persistence;

pub use clock::SystemClock;
pub use delivery::{DirectorySink, StdoutSink};
pub use persistence::{FileReader, FileWriter, InputSource};
