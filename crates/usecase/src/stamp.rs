// crates/usecase/src/stamp.rs
use chrono::{DateTime, SecondsFormat, Utc};

use crate::dto::ExportKind;

/// ISO-8601 instant with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// File-name safe stamp: seconds precision, colons replaced by hyphens.
pub fn file_stamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H-%M-%S").to_string()
}

/// `textutils-<stamp>.txt` or `textutils-data-<stamp>.json`.
pub fn export_filename(kind: ExportKind, at: DateTime<Utc>) -> String {
    let prefix = match kind {
        ExportKind::Text => "textutils",
        ExportKind::Structured => "textutils-data",
    };
    format!("{prefix}-{}.{}", file_stamp(at), kind.extension())
}
