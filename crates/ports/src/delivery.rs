// crates/ports/src/delivery.rs
use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};
use textutils_shared_kernel::Result;

/// MIME type of an export payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    #[serde(rename = "text/plain")]
    PlainText,
    #[serde(rename = "application/json")]
    Json,
}

impl MediaType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlainText => "text/plain",
            Self::Json => "application/json",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bytes plus the suggested file name, as handed to a sink.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryRequest<'a> {
    pub filename: &'a str,
    pub media_type: MediaType,
    pub bytes: &'a [u8],
}

/// Where a payload ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Delivered {
    File(PathBuf),
    Stdout { bytes: usize },
}

impl fmt::Display for Delivered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdout { bytes } => write!(f, "<stdout> ({bytes} bytes)"),
        }
    }
}

/// Port for persisting export payloads (file save, download, pipe).
pub trait PayloadSink: Send + Sync {
    fn deliver(&self, request: &DeliveryRequest<'_>) -> Result<Delivered>;
}
