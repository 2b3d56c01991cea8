//! Export module
//!
//! Writes reconstructed paragraphs to a spreadsheet, one row per
//! paragraph with an English ordinal label.
//!
//! # Layout
//!
//! | Row | A         | B           |
//! |-----|-----------|-------------|
//! | 1   | Ordinal   | Paragraph   |
//! | 2   | 1st       | first text  |
//! | 3   | 2nd       | second text |
//!
//! Column B wraps text; data rows get a fixed taller height.

mod ordinals;
mod types;
mod xlsx;

// Re-export public API
pub use ordinals::ordinal;
pub use types::{
    sanitize_sheet_name, ExportError, ExportSummary, Result, SheetLayout, SheetLayoutBuilder,
    DEFAULT_ORDINAL_WIDTH, DEFAULT_PARAGRAPH_WIDTH, DEFAULT_ROW_HEIGHT, DEFAULT_SHEET_NAME,
    ORDINAL_HEADER, PARAGRAPH_HEADER,
};
pub use xlsx::XlsxExporter;
