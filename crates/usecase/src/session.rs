// crates/usecase/src/session.rs
use textutils_domain::{PLACEHOLDER_TEXT, Report, Transform, analysis::segment, analyze};
use textutils_shared_kernel::Result;

use crate::{
    dto::{ExportKind, ExportPayload},
    exporter::ReportExporter,
};

/// Caller-held text buffer.
///
/// The engine keeps no state; this is where the "current text" lives
/// between edits. Every call to [`TextSession::report`] recomputes from
/// the current text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSession {
    text: String,
}

impl Default for TextSession {
    fn default() -> Self {
        Self { text: PLACEHOLDER_TEXT.to_owned() }
    }
}

impl TextSession {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replace the buffer with the transformed text.
    pub fn apply(&mut self, transform: Transform) {
        self.text = transform.apply(&self.text);
        log::debug!("applied {transform}, {} bytes remain", self.text.len());
    }

    /// Statistics for the current text. The untouched placeholder counts as blank.
    pub fn report(&self) -> Report {
        if self.text.trim() == PLACEHOLDER_TEXT {
            return Report::zero(segment::lines(&self.text));
        }
        analyze(&self.text)
    }

    /// Export the current text.
    ///
    /// # Errors
    ///
    /// See [`ReportExporter::export`].
    pub fn export(&self, exporter: &ReportExporter<'_>, kind: ExportKind) -> Result<ExportPayload> {
        exporter.export(kind, &self.text)
    }
}
