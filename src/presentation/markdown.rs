// src/presentation/markdown.rs
use std::io::Write;

use anyhow::Result;
use textutils_domain::Report;

use super::{minutes, word_or_na, word_with_len};

pub fn write(out: &mut impl Write, report: &Report, top: usize) -> Result<()> {
    writeln!(out, "### Text Statistics")?;
    writeln!(out)?;
    writeln!(out, "| Metric | Value |")?;
    writeln!(out, "|:---|---:|")?;
    let rows = [
        ("Characters", report.characters().to_string()),
        ("Characters (no spaces)", report.characters_no_spaces().to_string()),
        ("Words", report.words().to_string()),
        ("Sentences", report.sentences().to_string()),
        ("Paragraphs", report.paragraphs().to_string()),
        ("Lines", report.lines().to_string()),
        ("Avg words / sentence", report.average_words_per_sentence().to_string()),
        ("Avg chars / word", report.average_chars_per_word().to_string()),
        ("Reading time", minutes(report.reading_time())),
        ("Speaking time", minutes(report.speaking_time())),
        ("Typing time", minutes(report.typing_time())),
        ("Most common word", word_or_na(report.most_common_word())),
        ("Longest word", word_with_len(report.longest_word())),
        ("Shortest word", word_with_len(report.shortest_word())),
    ];
    for (label, value) in rows {
        writeln!(out, "| {label} | {} |", escape(&value))?;
    }

    let words = report.top_words(top);
    if words.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "### Most Frequent Words")?;
    writeln!(out)?;
    writeln!(out, "| # | Word | Count |")?;
    writeln!(out, "|---:|:---|---:|")?;
    for (rank, (word, count)) in words.iter().enumerate() {
        writeln!(out, "| {} | {} | {count} |", rank + 1, escape(word))?;
    }
    Ok(())
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use textutils_domain::analyze;

    use super::*;

    #[test]
    fn renders_tables() {
        let mut buf = Vec::new();
        write(&mut buf, &analyze("Hello world. Hello!"), 5).expect("renders");
        let md = String::from_utf8(buf).expect("utf8");
        assert!(md.starts_with("### Text Statistics\n\n| Metric | Value |\n|:---|---:|\n"));
        assert!(md.contains("| Words | 3 |"));
        assert!(md.contains("| Most common word | hello |"));
        assert!(md.contains("| 1 | hello | 2 |"));
        assert!(md.contains("| 2 | world | 1 |"));
    }

    #[test]
    fn empty_report_shows_na() {
        let mut buf = Vec::new();
        write(&mut buf, &analyze(""), 5).expect("renders");
        let md = String::from_utf8(buf).expect("utf8");
        assert!(md.contains("| Most common word | N/A |"));
        assert!(!md.contains("Most Frequent Words"));
    }

    #[test]
    fn pipes_are_escaped() {
        assert_eq!(escape("a|b"), "a\\|b");
    }
}
