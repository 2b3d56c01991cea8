//! DOCX paragraph reader
//!
//! Walks the body of a `.docx` with docx-rs and yields the text of each
//! top-level paragraph. Tables, images and section properties are ignored.

use std::fs;
use std::path::Path;

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use super::types::{DocumentError, DocumentReader, Result};

/// [`DocumentReader`] for Word documents
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxReader;

impl DocxReader {
    /// Create a new reader
    pub fn new() -> Self {
        Self
    }
}

impl DocumentReader for DocxReader {
    fn read_fragments(&self, docx: &Path) -> Result<Vec<String>> {
        let bytes = fs::read(docx)?;
        let document = read_docx(&bytes).map_err(|e| DocumentError::DocxRead {
            path: docx.to_path_buf(),
            message: e.to_string(),
        })?;

        let fragments: Vec<String> = document
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .collect();

        tracing::debug!(docx = %docx.display(), fragments = fragments.len(), "read document");
        Ok(fragments)
    }
}

/// Concatenate the runs of a paragraph
///
/// Breaks become `\n` and tabs `\t`, so a paragraph can carry several lines.
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();

    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                match rc {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Break(_) => text.push('\n'),
                    RunChild::Tab(_) => text.push('\t'),
                    _ => {}
                }
            }
        }
    }

    text
}
