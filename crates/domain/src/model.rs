pub mod report;
pub mod word_frequency;

pub use report::Report;
pub use word_frequency::WordFrequency;

/// エディタの初期表示テキスト。エクスポート時は空入力として扱う。
pub const PLACEHOLDER_TEXT: &str = "Enter Text here.....";

/// `true` for text with nothing to export: blank after trimming, or exactly
/// the untouched placeholder. Padded placeholder text is ordinary input.
pub fn is_blank_or_placeholder(text: &str) -> bool {
    text.trim().is_empty() || text == PLACEHOLDER_TEXT
}
