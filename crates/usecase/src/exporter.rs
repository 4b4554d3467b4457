// crates/usecase/src/exporter.rs
use textutils_domain::{analyze, is_blank_or_placeholder};
use textutils_ports::{
    clock::Clock,
    delivery::{Delivered, PayloadSink},
};
use textutils_shared_kernel::{ErrorContext, ExportError, Result};

use crate::{
    dto::{ExportKind, ExportPayload, GENERATOR, StructuredDocument},
    stamp,
};

/// Builds export payloads. Reads the clock exactly once per payload.
pub struct ReportExporter<'a> {
    clock: &'a dyn Clock,
}

impl<'a> ReportExporter<'a> {
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    /// Build the payload for `kind`.
    ///
    /// # Errors
    ///
    /// [`ExportError::EmptyInput`] when `text` is blank or the placeholder.
    pub fn export(&self, kind: ExportKind, text: &str) -> Result<ExportPayload> {
        match kind {
            ExportKind::Text => self.to_text_payload(text),
            ExportKind::Structured => self.to_structured_payload(text),
        }
    }

    /// The raw text as `textutils-<stamp>.txt`.
    ///
    /// # Errors
    ///
    /// [`ExportError::EmptyInput`] when `text` is blank or the placeholder.
    pub fn to_text_payload(&self, text: &str) -> Result<ExportPayload> {
        ensure_exportable(text)?;
        let now = self.clock.now();
        Ok(ExportPayload {
            kind: ExportKind::Text,
            filename: stamp::export_filename(ExportKind::Text, now),
            bytes: text.as_bytes().to_vec(),
        })
    }

    /// Text, statistics and metadata as `textutils-data-<stamp>.json`.
    ///
    /// # Errors
    ///
    /// [`ExportError::EmptyInput`] when `text` is blank or the placeholder, or a
    /// serialization error from `serde_json`.
    pub fn to_structured_payload(&self, text: &str) -> Result<ExportPayload> {
        ensure_exportable(text)?;
        let now = self.clock.now();
        let document = StructuredDocument {
            text: text.to_owned(),
            statistics: analyze(text),
            timestamp: stamp::iso_timestamp(now),
            generated_by: GENERATOR.to_owned(),
        };
        let bytes = serde_json::to_vec_pretty(&document).context("serializing export document")?;
        Ok(ExportPayload {
            kind: ExportKind::Structured,
            filename: stamp::export_filename(ExportKind::Structured, now),
            bytes,
        })
    }

    /// Hand `payload` to `sink`.
    ///
    /// # Errors
    ///
    /// Whatever the sink reports, wrapped with the payload's file name.
    pub fn deliver(&self, payload: &ExportPayload, sink: &dyn PayloadSink) -> Result<Delivered> {
        let delivered = sink
            .deliver(&payload.as_request())
            .with_context(|| format!("delivering {}", payload.filename))?;
        log::debug!("delivered {} ({}) to {delivered}", payload.filename, payload.media_type());
        Ok(delivered)
    }
}

fn ensure_exportable(text: &str) -> Result<()> {
    if is_blank_or_placeholder(text) {
        log::debug!("export refused: blank or placeholder text");
        return Err(ExportError::EmptyInput.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use chrono::{DateTime, TimeZone, Utc};
    use textutils_domain::{PLACEHOLDER_TEXT, Report};
    use textutils_ports::{clock::FixedClock, delivery::DeliveryRequest};

    use super::*;

    fn fixed() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).single().expect("valid datetime"))
    }

    struct CountingClock {
        at: DateTime<Utc>,
        reads: AtomicUsize,
    }

    impl Clock for CountingClock {
        fn now(&self) -> DateTime<Utc> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.at
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        seen: Mutex<Vec<(String, String)>>,
    }

    impl PayloadSink for RecordingSink {
        fn deliver(&self, request: &DeliveryRequest<'_>) -> Result<Delivered> {
            self.seen
                .lock()
                .unwrap()
                .push((request.filename.to_string(), request.media_type.to_string()));
            Ok(Delivered::Stdout { bytes: request.bytes.len() })
        }
    }

    #[test]
    fn text_payload_is_verbatim() {
        let clock = fixed();
        let exporter = ReportExporter::new(&clock);
        let payload = exporter.to_text_payload("  keep\nspacing  ").expect("exports");

        assert_eq!(payload.bytes, b"  keep\nspacing  ");
        assert_eq!(payload.filename, "textutils-2025-01-02T03-04-05.txt");
        assert_eq!(payload.media_type().as_str(), "text/plain");
    }

    #[test]
    fn structured_payload_holds_document() {
        let clock = fixed();
        let exporter = ReportExporter::new(&clock);
        let payload = exporter.to_structured_payload("a a a b b").expect("exports");

        assert_eq!(payload.filename, "textutils-data-2025-01-02T03-04-05.json");
        assert_eq!(payload.media_type().as_str(), "application/json");

        let doc: StructuredDocument = serde_json::from_slice(&payload.bytes).expect("valid json");
        assert_eq!(doc.text, "a a a b b");
        assert_eq!(doc.timestamp, "2025-01-02T03:04:05.000Z");
        assert_eq!(doc.generated_by, GENERATOR);
        assert_eq!(doc.statistics, analyze("a a a b b"));
        assert_eq!(doc.statistics.most_common_word(), "a");
    }

    #[test]
    fn structured_payload_uses_two_space_indent_and_key_order() {
        let clock = fixed();
        let payload = ReportExporter::new(&clock).to_structured_payload("Hi.").expect("exports");
        let json = String::from_utf8(payload.bytes).expect("utf8");

        assert!(json.starts_with("{\n  \"text\": \"Hi.\",\n  \"statistics\": {\n    \"characters\": 3,"));
        let order = ["\"text\"", "\"statistics\"", "\"timestamp\"", "\"generatedBy\""]
            .map(|key| json.find(key).expect("key present"));
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn blank_and_placeholder_text_are_refused() {
        let clock = fixed();
        let exporter = ReportExporter::new(&clock);
        for text in ["", "   \n\t", PLACEHOLDER_TEXT] {
            let err = exporter.to_text_payload(text).unwrap_err();
            assert!(err.is_empty_input(), "{text:?} should be refused");
            let err = exporter.to_structured_payload(text).unwrap_err();
            assert!(err.is_empty_input(), "{text:?} should be refused");
        }
    }

    #[test]
    fn padded_placeholder_exports_verbatim() {
        let clock = fixed();
        let exporter = ReportExporter::new(&clock);
        let text = "  Enter Text here.....\n";

        let payload = exporter.to_text_payload(text).expect("exports");
        assert_eq!(payload.bytes, text.as_bytes());

        let payload = exporter.to_structured_payload(text).expect("exports");
        let doc: StructuredDocument = serde_json::from_slice(&payload.bytes).expect("valid json");
        assert_eq!(doc.text, text);
        assert_eq!(doc.statistics, analyze(text));
    }

    #[test]
    fn clock_is_read_once_per_payload() {
        let clock = CountingClock { at: fixed().0, reads: AtomicUsize::new(0) };
        let exporter = ReportExporter::new(&clock);

        exporter.to_structured_payload("one two").expect("exports");
        assert_eq!(clock.reads.load(Ordering::SeqCst), 1);
        exporter.to_text_payload("one two").expect("exports");
        assert_eq!(clock.reads.load(Ordering::SeqCst), 2);
        exporter.to_text_payload("").unwrap_err();
        assert_eq!(clock.reads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn same_text_and_instant_give_identical_payloads() {
        let clock = fixed();
        let exporter = ReportExporter::new(&clock);
        let first = exporter.export(ExportKind::Structured, "Repeat me.").expect("exports");
        let second = exporter.export(ExportKind::Structured, "Repeat me.").expect("exports");
        assert_eq!(first, second);
    }

    #[test]
    fn statistics_round_trip_through_payload() {
        let clock = fixed();
        let text = "The quick brown fox.\n\nJumps over the lazy dog!";
        let payload = ReportExporter::new(&clock).to_structured_payload(text).expect("exports");
        let value: serde_json::Value = serde_json::from_slice(&payload.bytes).expect("json");
        let stats: Report = serde_json::from_value(value["statistics"].clone()).expect("report");
        assert_eq!(stats, analyze(value["text"].as_str().expect("text")));
    }

    #[test]
    fn deliver_forwards_to_sink() {
        let clock = fixed();
        let exporter = ReportExporter::new(&clock);
        let sink = RecordingSink::default();
        let payload = exporter.to_text_payload("hello").expect("exports");

        let delivered = exporter.deliver(&payload, &sink).expect("delivers");
        assert_eq!(delivered, Delivered::Stdout { bytes: 5 });
        let seen = sink.seen.lock().unwrap();
        assert_eq!(seen.as_slice(), [("textutils-2025-01-02T03-04-05.txt".to_string(), "text/plain".to_string())]);
    }
}
