// crates/domain/src/model/report.rs
use serde::{Deserialize, Serialize};

use super::WordFrequency;
use crate::value_objects::{
    CharCount, LineCount, Minutes, OneDecimal, ParagraphCount, SentenceCount, WordCount,
};

/// 読了時間の目安 (words/min)
pub const READING_WORDS_PER_MINUTE: usize = 200;
/// 音読時間の目安 (words/min)
pub const SPEAKING_WORDS_PER_MINUTE: usize = 150;
/// タイピング時間の目安 (words/min)
pub const TYPING_WORDS_PER_MINUTE: usize = 10;

/// Statistics snapshot of a single text.
///
/// Produced by [`crate::analysis::analyze`] and never modified afterwards;
/// a changed text yields a fresh `Report`. Field order here is the key order
/// of the serialized form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub(crate) characters: CharCount,
    pub(crate) characters_no_spaces: CharCount,
    pub(crate) words: WordCount,
    pub(crate) sentences: SentenceCount,
    pub(crate) paragraphs: ParagraphCount,
    pub(crate) lines: LineCount,
    pub(crate) average_words_per_sentence: OneDecimal,
    pub(crate) average_chars_per_word: OneDecimal,
    pub(crate) reading_time: Minutes,
    pub(crate) speaking_time: Minutes,
    pub(crate) most_common_word: String,
    pub(crate) word_frequency: WordFrequency,
    pub(crate) longest_word: String,
    pub(crate) shortest_word: String,
}

impl Report {
    /// Report for blank text. Only the line count survives.
    pub fn zero(lines: LineCount) -> Self {
        Self { lines, ..Self::default() }
    }

    #[inline]
    pub fn characters(&self) -> CharCount {
        self.characters
    }

    #[inline]
    pub fn characters_no_spaces(&self) -> CharCount {
        self.characters_no_spaces
    }

    #[inline]
    pub fn words(&self) -> WordCount {
        self.words
    }

    #[inline]
    pub fn sentences(&self) -> SentenceCount {
        self.sentences
    }

    #[inline]
    pub fn paragraphs(&self) -> ParagraphCount {
        self.paragraphs
    }

    #[inline]
    pub fn lines(&self) -> LineCount {
        self.lines
    }

    #[inline]
    pub fn average_words_per_sentence(&self) -> OneDecimal {
        self.average_words_per_sentence
    }

    #[inline]
    pub fn average_chars_per_word(&self) -> OneDecimal {
        self.average_chars_per_word
    }

    #[inline]
    pub fn reading_time(&self) -> Minutes {
        self.reading_time
    }

    #[inline]
    pub fn speaking_time(&self) -> Minutes {
        self.speaking_time
    }

    /// Minutes to type the text at [`TYPING_WORDS_PER_MINUTE`]. Not serialized.
    pub fn typing_time(&self) -> Minutes {
        Minutes::at_pace(self.words.value(), TYPING_WORDS_PER_MINUTE)
    }

    #[inline]
    pub fn most_common_word(&self) -> &str {
        &self.most_common_word
    }

    #[inline]
    pub fn word_frequency(&self) -> &WordFrequency {
        &self.word_frequency
    }

    #[inline]
    pub fn longest_word(&self) -> &str {
        &self.longest_word
    }

    #[inline]
    pub fn shortest_word(&self) -> &str {
        &self.shortest_word
    }

    /// The `n` most frequent words, highest count first.
    pub fn top_words(&self, n: usize) -> Vec<(&str, usize)> {
        self.word_frequency.top(n)
    }
}
