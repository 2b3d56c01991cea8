//! Paragraph boundary policies
//!
//! A policy answers one question for the reconstructor: does the
//! accumulated text end a paragraph?

/// Characters whose presence at the end of the accumulated text closes a paragraph
pub const TERMINAL_SET: [char; 7] = ['.', '!', '?', ':', ';', ']', '"'];

/// Decides whether accumulated text forms a complete paragraph
pub trait BoundaryPolicy {
    /// Return true if `text` ends a paragraph
    fn ends_paragraph(&self, text: &str) -> bool;
}

impl<F> BoundaryPolicy for F
where
    F: Fn(&str) -> bool,
{
    fn ends_paragraph(&self, text: &str) -> bool {
        self(text)
    }
}

/// Default policy: the last character is in [`TERMINAL_SET`]
///
/// Trailing whitespace is not skipped, so `"Done. "` does not close.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalPunctuation;

impl BoundaryPolicy for TerminalPunctuation {
    fn ends_paragraph(&self, text: &str) -> bool {
        text.chars()
            .next_back()
            .is_some_and(|c| TERMINAL_SET.contains(&c))
    }
}
