// crates/domain/src/transform.rs
use std::fmt;

/// Whole-text edits offered next to the statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Uppercase,
    Lowercase,
    Clear,
}

impl Transform {
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Uppercase => text.to_uppercase(),
            Self::Lowercase => text.to_lowercase(),
            Self::Clear => String::new(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uppercase => "upper",
            Self::Lowercase => "lower",
            Self::Clear => "clear",
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_conversion_is_unicode_aware() {
        assert_eq!(Transform::Uppercase.apply("straße"), "STRASSE");
        assert_eq!(Transform::Lowercase.apply("ÀÉÎ Text"), "àéî text");
    }

    #[test]
    fn clear_empties_text() {
        assert_eq!(Transform::Clear.apply("anything at all"), "");
    }

    #[test]
    fn display_uses_short_names() {
        assert_eq!(Transform::Uppercase.to_string(), "upper");
        assert_eq!(Transform::Lowercase.to_string(), "lower");
        assert_eq!(Transform::Clear.to_string(), "clear");
    }
}
