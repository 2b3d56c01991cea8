//! Paragraph module
//!
//! Turns raw fragments extracted from the intermediate document into
//! clean, ordered paragraphs.
//!
//! # Features
//!
//! - Quote and bracket normalization ([`normalize_text`])
//! - Pluggable paragraph boundary detection ([`BoundaryPolicy`])
//! - Merging across page breaks and re-splitting on line breaks
//!
//! # Example
//!
//! ```rust
//! use pdf_paragraphs::reconstruct_paragraphs;
//!
//! let paragraphs = reconstruct_paragraphs(&[
//!     "This is a sentence",
//!     "that continues.",
//!     "New paragraph starts here.",
//! ]);
//! assert_eq!(paragraphs.len(), 2);
//! ```

mod boundary;
mod normalize;
mod reconstruct;

// Re-export public API
pub use boundary::{BoundaryPolicy, TerminalPunctuation, TERMINAL_SET};
pub use normalize::normalize_text;
pub use reconstruct::{reconstruct_paragraphs, ParagraphReconstructor};
