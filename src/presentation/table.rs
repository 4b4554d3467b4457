// src/presentation/table.rs
use std::io::Write;

use anyhow::Result;
use textutils_domain::Report;

use super::{minutes, word_or_na, word_with_len};

const LABEL_WIDTH: usize = 26;

pub fn write(out: &mut impl Write, report: &Report, top: usize) -> Result<()> {
    writeln!(out, "textutils v{}", crate::VERSION)?;
    writeln!(out)?;

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
        writeln!(out, "{label:<LABEL_WIDTH$}{value}")?;
    }

    let words = report.top_words(top);
    if words.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "Top {} words", words.len())?;
    writeln!(out, "---")?;
    for (rank, (word, count)) in words.iter().enumerate() {
        writeln!(out, "{:>3}. {word:<20} {count:>6}", rank + 1)?;
    }
    Ok(())
}
