// crates/domain/src/analysis/segment.rs
//! Splitting heuristics: whitespace words, punctuation sentences, blank-line paragraphs.

use std::sync::OnceLock;

use regex::Regex;

use crate::value_objects::{CharCount, LineCount, ParagraphCount, SentenceCount};

fn sentence_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence boundary pattern is valid"))
}

fn paragraph_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("paragraph boundary pattern is valid"))
}

/// Unicode scalar values in `text`.
#[inline]
pub fn characters(text: &str) -> CharCount {
    CharCount::new(bytecount::num_chars(text.as_bytes()))
}

/// Scalar values that are not `White_Space`.
pub fn characters_no_spaces(text: &str) -> CharCount {
    CharCount::new(text.chars().filter(|c| !c.is_whitespace()).count())
}

/// Maximal non-whitespace runs.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Segments between runs of `.`, `!`, `?` that contain something other than whitespace.
pub fn sentences(text: &str) -> SentenceCount {
    SentenceCount::new(non_blank(sentence_boundary().split(text)))
}

/// Segments between blank lines that contain something other than whitespace.
pub fn paragraphs(text: &str) -> ParagraphCount {
    ParagraphCount::new(non_blank(paragraph_boundary().split(text)))
}

/// `\n`-separated segments, blank ones included. Never less than one.
#[inline]
pub fn lines(text: &str) -> LineCount {
    LineCount::new(bytecount::count(text.as_bytes(), b'\n') + 1)
}

fn non_blank<'a>(segments: impl Iterator<Item = &'a str>) -> usize {
    segments.filter(|s| !s.trim().is_empty()).count()
}
