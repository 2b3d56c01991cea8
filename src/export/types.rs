//! Export module core types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

// ============================================================
// Constants
// ============================================================

/// Default worksheet name
pub const DEFAULT_SHEET_NAME: &str = "Paragraphs";

/// Header cell for the ordinal column
pub const ORDINAL_HEADER: &str = "Ordinal";

/// Header cell for the paragraph column
pub const PARAGRAPH_HEADER: &str = "Paragraph";

/// Default width of column A (characters)
pub const DEFAULT_ORDINAL_WIDTH: f64 = 15.0;

/// Default width of column B (characters)
pub const DEFAULT_PARAGRAPH_WIDTH: f64 = 80.0;

/// Default height of data rows (points)
pub const DEFAULT_ROW_HEIGHT: f64 = 60.0;

/// Column width clamp range accepted by spreadsheet applications
pub const MIN_COLUMN_WIDTH: f64 = 1.0;
pub const MAX_COLUMN_WIDTH: f64 = 255.0;

/// Row height clamp range (points)
pub const MIN_ROW_HEIGHT: f64 = 1.0;
pub const MAX_ROW_HEIGHT: f64 = 409.0;

/// Maximum worksheet name length
pub const MAX_SHEET_NAME_LEN: usize = 31;

// ============================================================
// Error Types
// ============================================================

/// Export error types
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(rust_xlsxwriter::XlsxError),
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        match err {
            rust_xlsxwriter::XlsxError::IoError(e) => ExportError::IoError(e),
            other => ExportError::Workbook(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

// ============================================================
// Layout
// ============================================================

/// Worksheet layout options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    /// Worksheet name
    pub sheet_name: String,
    /// Width of the ordinal column
    pub ordinal_width: f64,
    /// Width of the paragraph column
    pub paragraph_width: f64,
    /// Height applied to every data row
    pub row_height: f64,
    /// Wrap text in the paragraph column
    pub wrap_text: bool,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            ordinal_width: DEFAULT_ORDINAL_WIDTH,
            paragraph_width: DEFAULT_PARAGRAPH_WIDTH,
            row_height: DEFAULT_ROW_HEIGHT,
            wrap_text: true,
        }
    }
}

impl SheetLayout {
    /// Create a new layout builder
    pub fn builder() -> SheetLayoutBuilder {
        SheetLayoutBuilder::default()
    }
}

/// Builder for SheetLayout
#[derive(Debug, Default)]
pub struct SheetLayoutBuilder {
    layout: SheetLayout,
}

impl SheetLayoutBuilder {
    /// Set worksheet name (invalid characters removed, truncated to 31 chars)
    #[must_use]
    pub fn sheet_name(mut self, name: impl Into<String>) -> Self {
        self.layout.sheet_name = sanitize_sheet_name(&name.into());
        self
    }

    /// Set ordinal column width (clamped to 1-255)
    #[must_use]
    pub fn ordinal_width(mut self, width: f64) -> Self {
        self.layout.ordinal_width = width.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
        self
    }

    /// Set paragraph column width (clamped to 1-255)
    #[must_use]
    pub fn paragraph_width(mut self, width: f64) -> Self {
        self.layout.paragraph_width = width.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
        self
    }

    /// Set data row height (clamped to 1-409)
    #[must_use]
    pub fn row_height(mut self, height: f64) -> Self {
        self.layout.row_height = height.clamp(MIN_ROW_HEIGHT, MAX_ROW_HEIGHT);
        self
    }

    /// Set text wrapping for the paragraph column
    #[must_use]
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.layout.wrap_text = wrap;
        self
    }

    /// Build the layout
    #[must_use]
    pub fn build(self) -> SheetLayout {
        self.layout
    }
}

/// Make a string usable as a worksheet name
///
/// Strips `[ ] : * ? / \`, truncates to 31 characters and falls back to
/// the default name when nothing is left.
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(MAX_SHEET_NAME_LEN)
        .collect();
    let cleaned = cleaned.trim_matches('\'').trim();
    if cleaned.is_empty() {
        DEFAULT_SHEET_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Result of a workbook export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSummary {
    /// Written workbook path
    pub path: PathBuf,
    /// Number of data rows (excluding the header)
    pub rows: usize,
}
