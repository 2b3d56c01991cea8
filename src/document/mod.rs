//! Document module
//!
//! The intermediate word-processing document sitting between the source
//! PDF and the spreadsheet.
//!
//! # Features
//!
//! - PDF to DOCX conversion with page order preserved ([`LopdfConverter`])
//! - Paragraph fragment extraction from DOCX ([`DocxReader`])
//! - Collaborator traits ([`PdfConverter`], [`DocumentReader`]) so other
//!   converters can be plugged into the pipeline
//!
//! # Example
//!
//! ```rust,no_run
//! use pdf_paragraphs::{DocumentReader, DocxReader, LopdfConverter, PdfConverter};
//! use std::path::Path;
//!
//! let converter = LopdfConverter::new();
//! converter.convert(Path::new("book.pdf"), Path::new("book.docx")).unwrap();
//!
//! let fragments = DocxReader::new().read_fragments(Path::new("book.docx")).unwrap();
//! println!("{} fragments", fragments.len());
//! ```

mod pdf_to_docx;
mod reader;
mod types;

// Re-export public API
pub use pdf_to_docx::{group_lines, LopdfConverter, PageText};
pub use reader::DocxReader;
pub use types::{
    ConversionOptions, ConversionSummary, DocumentError, DocumentReader, LineGrouping,
    PdfConverter, Result,
};
