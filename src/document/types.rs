//! Document module core types
//!
//! Error types, conversion options and the collaborator traits the
//! pipeline drives.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================
// Error Types
// ============================================================

/// Intermediate document error types
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("PDF not found: {0}")]
    PdfNotFound(PathBuf),

    #[error("Failed to load PDF {path}: {message}")]
    PdfLoad { path: PathBuf, message: String },

    #[error("PDF is encrypted: {0}")]
    PdfEncrypted(PathBuf),

    #[error("No text could be extracted from {0}")]
    TextExtraction(PathBuf),

    #[error("Failed to write document {path}: {message}")]
    DocxWrite { path: PathBuf, message: String },

    #[error("Failed to read document {path}: {message}")]
    DocxRead { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DocumentError>;

// ============================================================
// Options
// ============================================================

/// How extracted PDF lines are grouped into document paragraphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineGrouping {
    /// One paragraph per extracted line
    #[default]
    Line,
    /// One paragraph per blank-line separated block, lines kept as soft breaks
    Block,
}

impl std::fmt::Display for LineGrouping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineGrouping::Line => write!(f, "line"),
            LineGrouping::Block => write!(f, "block"),
        }
    }
}

/// PDF to document conversion options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Paragraph grouping
    pub grouping: LineGrouping,
    /// Insert a page break paragraph between pages
    pub page_breaks: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            grouping: LineGrouping::Line,
            page_breaks: true,
        }
    }
}

/// Result of a PDF to document conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionSummary {
    /// Pages in the source PDF
    pub pages: usize,
    /// Pages whose text could not be extracted
    pub skipped_pages: Vec<u32>,
    /// Paragraphs written to the document
    pub paragraphs: usize,
}

// ============================================================
// Collaborator Traits
// ============================================================

/// Converts a PDF into an intermediate word-processing document
pub trait PdfConverter {
    /// Convert every page of `pdf` into a document at `docx`
    fn convert(&self, pdf: &Path, docx: &Path) -> Result<ConversionSummary>;
}

/// Reads raw paragraph fragments from an intermediate document
pub trait DocumentReader {
    /// One fragment per body paragraph, in document order
    fn read_fragments(&self, docx: &Path) -> Result<Vec<String>>;
}
