// crates/domain/src/analysis/normalize.rs

/// Lowercases `word` and drops everything outside `[A-Za-z0-9_]`.
///
/// The result may be empty (for example `"--"` or `"¿?"`).
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
