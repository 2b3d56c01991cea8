//! pdf-paragraphs - PDF to paragraph spreadsheet converter
//!
//! Converts each PDF into an intermediate Word document, pulls the
//! paragraphs back out, repairs paragraphs split by page breaks and writes
//! them to an `.xlsx` sheet with ordinal numbering.
//!
//! # Modules
//!
//! - [`paragraph`] - normalization and paragraph reconstruction
//! - [`export`] - ordinal labels and the spreadsheet writer
//! - [`document`] - PDF to DOCX conversion and DOCX reading
//! - [`pipeline`] - per-file and batch orchestration
//! - [`shell`] - validated conversion commands for front ends
//! - [`config`] - TOML configuration with CLI overrides
//! - [`progress`] - progress callbacks and console output

pub mod cli;
pub mod config;
pub mod document;
pub mod export;
pub mod paragraph;
pub mod pipeline;
pub mod progress;
pub mod shell;

// CLI
pub use cli::{Cli, Commands, ConvertArgs};

// Config
pub use config::{CliOverrides, Config, ConfigError, PipelineConfig};

// Document
pub use document::{
    ConversionOptions, ConversionSummary, DocumentError, DocumentReader, DocxReader,
    LineGrouping, LopdfConverter, PdfConverter,
};

// Export
pub use export::{ordinal, ExportError, ExportSummary, SheetLayout, XlsxExporter};

// Paragraph
pub use paragraph::{
    normalize_text, reconstruct_paragraphs, BoundaryPolicy, ParagraphReconstructor,
    TerminalPunctuation,
};

// Pipeline
pub use pipeline::{
    collect_pdf_files, BatchPolicy, BatchReport, BatchStatus, FileFailure, FileOutcome,
    InputMode, OutputLayout, ParagraphPipeline, PipelineError,
};

// Progress
pub use progress::{OutputMode, ProcessingStage, ProgressCallback, ProgressTracker, SilentProgress};

// Shell
pub use shell::{ConversionPlan, ConvertCommand, ShellError, ValidationError};

/// Process exit codes
pub mod exit_codes {
    /// Every file converted
    pub const SUCCESS: i32 = 0;
    /// Unexpected failure
    pub const GENERAL_ERROR: i32 = 1;
    /// Invalid arguments or input validation failure
    pub const INVALID_ARGS: i32 = 2;
    /// Input path missing or no PDFs found
    pub const INPUT_NOT_FOUND: i32 = 3;
    /// At least one file in the batch failed
    pub const PARTIAL_FAILURE: i32 = 4;
}
