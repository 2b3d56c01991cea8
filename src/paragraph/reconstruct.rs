//! Paragraph reconstruction
//!
//! Extracted fragments follow the structure of the intermediate document,
//! which breaks paragraphs at page and column boundaries. Fragments are
//! glued back together until the boundary policy says a paragraph is
//! complete, then each merged unit is re-split on its embedded line breaks.

use super::boundary::{BoundaryPolicy, TerminalPunctuation};
use super::normalize::normalize_text;

/// Merges raw fragments into ordered, trimmed, non-empty paragraphs
#[derive(Debug, Clone, Default)]
pub struct ParagraphReconstructor<P = TerminalPunctuation> {
    policy: P,
}

impl ParagraphReconstructor {
    /// Create a reconstructor using [`TerminalPunctuation`]
    pub fn new() -> Self {
        Self {
            policy: TerminalPunctuation,
        }
    }
}

impl<P: BoundaryPolicy> ParagraphReconstructor<P> {
    /// Create a reconstructor with a custom boundary policy
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    /// Reconstruct paragraphs from fragments in document order
    pub fn reconstruct<S: AsRef<str>>(&self, fragments: &[S]) -> Vec<String> {
        let merged = self.merge(fragments);
        let paragraphs: Vec<String> = merged.iter().flat_map(|unit| split_lines(unit)).collect();

        tracing::debug!(
            fragments = fragments.len(),
            merged = merged.len(),
            paragraphs = paragraphs.len(),
            "reconstructed paragraphs"
        );
        paragraphs
    }

    /// Merge fragments into units closed by the boundary policy
    fn merge<S: AsRef<str>>(&self, fragments: &[S]) -> Vec<String> {
        let mut merged = Vec::new();
        let mut current = String::new();

        for fragment in fragments.iter().map(AsRef::as_ref) {
            if fragment.trim().is_empty() {
                continue;
            }
            let fragment = normalize_text(fragment);

            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&fragment);

            if self.policy.ends_paragraph(&current) {
                merged.push(std::mem::take(&mut current));
            }
        }

        // Unterminated tail is emitted as-is
        if !current.is_empty() {
            merged.push(current);
        }

        merged
    }
}

/// Split a merged unit on `\n` / `\r\n`, trimming and dropping blank lines
fn split_lines(unit: &str) -> impl Iterator<Item = String> + '_ {
    unit.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}

/// Reconstruct paragraphs with the default terminal-punctuation policy
pub fn reconstruct_paragraphs<S: AsRef<str>>(fragments: &[S]) -> Vec<String> {
    ParagraphReconstructor::new().reconstruct(fragments)
}
