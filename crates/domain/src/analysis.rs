// crates/domain/src/analysis.rs
//! Text statistics engine.
//!
//! [`analyze`] is a total, pure function: it never fails, performs no I/O and
//! keeps no state between calls, so identical input always produces an
//! identical [`Report`].

pub mod extremes;
pub mod normalize;
pub mod segment;

pub use normalize::normalize_word;

use crate::{
    model::{
        Report, WordFrequency,
        report::{READING_WORDS_PER_MINUTE, SPEAKING_WORDS_PER_MINUTE},
    },
    value_objects::{Minutes, OneDecimal, WordCount},
};

/// Computes the statistics [`Report`] for `text`.
///
/// Blank text (empty after trimming) yields [`Report::zero`], which still
/// carries the raw line count.
pub fn analyze(text: &str) -> Report {
    let lines = segment::lines(text);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        log::trace!("analyze: blank input, {lines} line(s)");
        return Report::zero(lines);
    }

    let characters = segment::characters(text);
    let characters_no_spaces = segment::characters_no_spaces(text);
    let tokens = segment::words(trimmed);
    let words = WordCount::new(tokens.len());
    let sentences = segment::sentences(text);
    let paragraphs = segment::paragraphs(text);

    let average_words_per_sentence = OneDecimal::ratio(words.value(), sentences.value());
    let average_chars_per_word = OneDecimal::ratio(characters_no_spaces.value(), words.value());
    let reading_time = Minutes::at_pace(words.value(), READING_WORDS_PER_MINUTE);
    let speaking_time = Minutes::at_pace(words.value(), SPEAKING_WORDS_PER_MINUTE);

    let normalized: Vec<String> = tokens.iter().map(|w| normalize_word(w)).collect();
    let word_frequency = WordFrequency::from_words(&normalized);
    let most_common_word = word_frequency.most_common().unwrap_or_default().to_owned();
    let longest_word = extremes::longest(normalized.iter().map(String::as_str)).to_owned();
    let shortest_word = extremes::shortest(normalized.iter().map(String::as_str)).to_owned();

    log::trace!(
        "analyze: {characters} chars, {words} words, {} distinct",
        word_frequency.len()
    );

    Report {
        characters,
        characters_no_spaces,
        words,
        sentences,
        paragraphs,
        lines,
        average_words_per_sentence,
        average_chars_per_word,
        reading_time,
        speaking_time,
        most_common_word,
        word_frequency,
        longest_word,
        shortest_word,
    }
}
