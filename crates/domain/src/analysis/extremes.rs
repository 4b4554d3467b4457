// crates/domain/src/analysis/extremes.rs

/// Longest non-empty word by `char` count. Earliest wins ties; `""` if none.
pub fn longest<'a>(words: impl IntoIterator<Item = &'a str>) -> &'a str {
    pick(words, |candidate, best| candidate > best)
}

/// Shortest non-empty word by `char` count. Earliest wins ties; `""` if none.
pub fn shortest<'a>(words: impl IntoIterator<Item = &'a str>) -> &'a str {
    pick(words, |candidate, best| candidate < best)
}

fn pick<'a>(words: impl IntoIterator<Item = &'a str>, replaces: impl Fn(usize, usize) -> bool) -> &'a str {
    words
        .into_iter()
        .filter(|w| !w.is_empty())
        .fold(None, |best: Option<(&'a str, usize)>, word| {
            let len = word.chars().count();
            match best {
                Some((_, best_len)) if !replaces(len, best_len) => best,
                _ => Some((word, len)),
            }
        })
        .map_or("", |(word, _)| word)
}
