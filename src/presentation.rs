// src/presentation.rs
mod markdown;
mod structured;
mod table;

use std::io::Write;

use anyhow::Result;
use textutils_domain::Report;

use crate::options::OutputFormat;

/// Render `report` in `format`, listing up to `top` frequent words where the
/// format has room for them.
pub fn write_report(out: &mut impl Write, report: &Report, format: OutputFormat, top: usize) -> Result<()> {
    match format {
        OutputFormat::Table => table::write(out, report, top),
        OutputFormat::Json => structured::write_json(out, report),
        OutputFormat::Yaml => structured::write_yaml(out, report),
        OutputFormat::Md => markdown::write(out, report, top),
    }
}

/// Display form of a word statistic: `N/A` for the empty word, otherwise
/// the word with its length.
fn word_with_len(word: &str) -> String {
    if word.is_empty() {
        "N/A".to_string()
    } else {
        format!("{word} ({})", word.chars().count())
    }
}

fn word_or_na(word: &str) -> String {
    if word.is_empty() { "N/A".to_string() } else { word.to_string() }
}

fn minutes(m: impl std::fmt::Display) -> String {
    format!("{m} min")
}

#[cfg(test)]
mod tests {
    use textutils_domain::analyze;

    use super::*;

    fn render(report: &Report, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, report, format, 5).expect("renders");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn word_display() {
        assert_eq!(word_with_len(""), "N/A");
        assert_eq!(word_with_len("hello"), "hello (5)");
    }

    #[test]
    fn every_format_renders() {
        let report = analyze("Hello world. Hello again!");
        for format in [OutputFormat::Table, OutputFormat::Json, OutputFormat::Yaml, OutputFormat::Md] {
            let out = render(&report, format);
            assert!(out.contains("hello"), "{format:?}: {out}");
            assert!(out.ends_with('\n'), "{format:?}");
        }
    }

    #[test]
    fn json_output_is_the_report() {
        let report = analyze("a a b");
        let out = render(&report, OutputFormat::Json);
        let decoded: Report = serde_json::from_str(&out).expect("json");
        assert_eq!(decoded, report);
    }
}
