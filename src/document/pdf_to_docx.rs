//! PDF to DOCX conversion
//!
//! Text is pulled page by page with lopdf and laid out as Word paragraphs
//! with docx-rs. The document keeps the page structure of the PDF, so a
//! sentence running over a page boundary ends up split across paragraphs;
//! the paragraph reconstructor repairs that later.

use std::fs::File;
use std::path::Path;

use docx_rs::{BreakType, Docx, Paragraph, Run};
use lopdf::Document;

use super::types::{
    ConversionOptions, ConversionSummary, DocumentError, LineGrouping, PdfConverter, Result,
};

/// Text of one PDF page grouped into paragraphs
#[derive(Debug, Clone, PartialEq)]
pub struct PageText {
    /// 1-based page number
    pub page_number: u32,
    /// Paragraphs; each entry holds one or more lines
    pub paragraphs: Vec<Vec<String>>,
}

/// [`PdfConverter`] backed by lopdf text extraction and docx-rs output
#[derive(Debug, Clone, Default)]
pub struct LopdfConverter {
    options: ConversionOptions,
}

impl LopdfConverter {
    /// Create a converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with the specified options
    pub fn with_options(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Extract and group the text of every page, in page order
    pub fn extract_pages(&self, pdf: &Path) -> Result<(Vec<PageText>, Vec<u32>)> {
        if !pdf.exists() {
            return Err(DocumentError::PdfNotFound(pdf.to_path_buf()));
        }

        let document = Document::load(pdf).map_err(|e| DocumentError::PdfLoad {
            path: pdf.to_path_buf(),
            message: e.to_string(),
        })?;
        if document.is_encrypted() {
            return Err(DocumentError::PdfEncrypted(pdf.to_path_buf()));
        }

        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        let mut pages = Vec::with_capacity(page_numbers.len());
        let mut skipped = Vec::new();

        for page_number in page_numbers {
            match document.extract_text(&[page_number]) {
                Ok(text) => pages.push(PageText {
                    page_number,
                    paragraphs: group_lines(&text, self.options.grouping),
                }),
                Err(e) => {
                    tracing::warn!(page = page_number, error = %e, "skipping page without extractable text");
                    skipped.push(page_number);
                }
            }
        }

        if pages.is_empty() && !skipped.is_empty() {
            return Err(DocumentError::TextExtraction(pdf.to_path_buf()));
        }

        Ok((pages, skipped))
    }

    /// Lay the pages out as a Word document
    pub fn build_document(&self, pages: &[PageText]) -> Docx {
        let mut docx = Docx::new();

        for (i, page) in pages.iter().enumerate() {
            if i > 0 && self.options.page_breaks {
                docx = docx
                    .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)));
            }

            for lines in &page.paragraphs {
                let mut run = Run::new();
                for (j, line) in lines.iter().enumerate() {
                    if j > 0 {
                        run = run.add_break(BreakType::TextWrapping);
                    }
                    run = run.add_text(line);
                }
                docx = docx.add_paragraph(Paragraph::new().add_run(run));
            }
        }

        docx
    }
}

impl PdfConverter for LopdfConverter {
    fn convert(&self, pdf: &Path, docx: &Path) -> Result<ConversionSummary> {
        let (pages, skipped_pages) = self.extract_pages(pdf)?;
        let paragraphs = pages.iter().map(|p| p.paragraphs.len()).sum();

        let file = File::create(docx)?;
        self.build_document(&pages)
            .build()
            .pack(file)
            .map_err(|e| DocumentError::DocxWrite {
                path: docx.to_path_buf(),
                message: e.to_string(),
            })?;

        tracing::info!(
            pdf = %pdf.display(),
            docx = %docx.display(),
            pages = pages.len() + skipped_pages.len(),
            paragraphs,
            "converted PDF to document"
        );

        Ok(ConversionSummary {
            pages: pages.len() + skipped_pages.len(),
            skipped_pages,
            paragraphs,
        })
    }
}

/// Group raw page text into paragraphs of lines
///
/// Lines are right-trimmed; blank lines separate blocks in
/// [`LineGrouping::Block`] mode and are dropped in [`LineGrouping::Line`] mode.
pub fn group_lines(text: &str, grouping: LineGrouping) -> Vec<Vec<String>> {
    let mut paragraphs = Vec::new();
    let mut block: Vec<String> = Vec::new();

    for line in text.lines().map(str::trim_end) {
        if line.trim().is_empty() {
            if !block.is_empty() {
                paragraphs.push(std::mem::take(&mut block));
            }
            continue;
        }

        match grouping {
            LineGrouping::Line => paragraphs.push(vec![line.to_string()]),
            LineGrouping::Block => block.push(line.to_string()),
        }
    }

    if !block.is_empty() {
        paragraphs.push(block);
    }

    paragraphs
}
