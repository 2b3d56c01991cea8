//! Punctuation normalization for extracted text

/// Left double quotation mark (U+201C)
const LEFT_DOUBLE_QUOTE: char = '\u{201C}';

/// Right double quotation mark (U+201D)
const RIGHT_DOUBLE_QUOTE: char = '\u{201D}';

/// Full-width right square bracket (U+FF3D)
const FULLWIDTH_RIGHT_BRACKET: char = '\u{FF3D}';

/// Canonicalize punctuation variants in a fragment.
///
/// Curly double quotes become `"` and the full-width closing bracket
/// becomes `]`. Every other character is kept as-is.
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            LEFT_DOUBLE_QUOTE | RIGHT_DOUBLE_QUOTE => '"',
            FULLWIDTH_RIGHT_BRACKET => ']',
            other => other,
        })
        .collect()
}
