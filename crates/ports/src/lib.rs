//! # Ports
//!
//! Interface definitions for external collaborators.
//!
//! - [`clock`]: wall-clock time used to stamp exports
//! - [`delivery`]: handing finished export payloads to storage
//!
//! These ports keep the use cases free of any concrete I/O.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod clock;
pub mod delivery;
