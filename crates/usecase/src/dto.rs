// crates/usecase/src/dto.rs
use serde::{Deserialize, Serialize};
use textutils_domain::Report;
use textutils_ports::delivery::{DeliveryRequest, MediaType};

/// Value of the `generatedBy` field in structured exports.
pub const GENERATOR: &str = concat!("textutils ", env!("CARGO_PKG_VERSION"));

/// Which representation to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    /// The raw text, verbatim.
    Text,
    /// Text, statistics and metadata as a JSON document.
    Structured,
}

impl ExportKind {
    pub const fn media_type(self) -> MediaType {
        match self {
            Self::Text => MediaType::PlainText,
            Self::Structured => MediaType::Json,
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Structured => "json",
        }
    }
}

/// Finished export, ready for a [`textutils_ports::delivery::PayloadSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub kind: ExportKind,
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ExportPayload {
    pub fn media_type(&self) -> MediaType {
        self.kind.media_type()
    }

    pub fn as_request(&self) -> DeliveryRequest<'_> {
        DeliveryRequest {
            filename: &self.filename,
            media_type: self.media_type(),
            bytes: &self.bytes,
        }
    }
}

/// JSON document written by structured exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDocument {
    pub text: String,
    pub statistics: Report,
    pub timestamp: String,
    pub generated_by: String,
}
