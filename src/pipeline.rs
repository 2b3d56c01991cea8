//! Conversion pipeline
//!
//! Drives one PDF (or a folder of them) through
//! convert → extract → reconstruct → export, laying the results out as
//! `<output>/<name>/<name>.docx` and `<output>/<name>/<name>_paragraphs.xlsx`.
//!
//! Processing is sequential: each file is finished before the next starts.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::config::PipelineConfig;
use crate::document::{
    ConversionSummary, DocumentError, DocumentReader, DocxReader, LopdfConverter, PdfConverter,
};
use crate::export::{ExportError, XlsxExporter};
use crate::paragraph::{BoundaryPolicy, ParagraphReconstructor, TerminalPunctuation};
use crate::progress::{ProcessingStage, ProgressCallback};

/// Suffix appended to the spreadsheet file stem
pub const XLSX_SUFFIX: &str = "_paragraphs";

// ============================================================
// Error Types
// ============================================================

/// Pipeline error types
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to create output folder {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Output folder {dir} is already used by {earlier}")]
    OutputConflict { dir: PathBuf, earlier: PathBuf },

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

// ============================================================
// Input Discovery
// ============================================================

/// How the input path is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// A single PDF file
    File,
    /// Every PDF directly inside a folder
    Folder,
}

impl InputMode {
    /// Pick the mode from what the path points at
    pub fn detect(input: &Path) -> Self {
        if input.is_dir() {
            InputMode::Folder
        } else {
            InputMode::File
        }
    }
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputMode::File => write!(f, "file"),
            InputMode::Folder => write!(f, "folder"),
        }
    }
}

/// True when the file name ends in `.pdf` (any case)
pub fn has_pdf_suffix(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Collect the PDFs to process
///
/// File mode yields the path itself. Folder mode lists the folder
/// (non-recursive) and keeps regular files with a `.pdf` suffix, sorted.
pub fn collect_pdf_files(input: &Path, mode: InputMode) -> Result<Vec<PathBuf>> {
    if !input.exists() {
        return Err(PipelineError::InputNotFound(input.to_path_buf()));
    }

    let mut pdf_files = Vec::new();
    match mode {
        InputMode::File => {
            if input.is_file() && has_pdf_suffix(input) {
                pdf_files.push(input.to_path_buf());
            }
        }
        InputMode::Folder => {
            for entry in std::fs::read_dir(input)? {
                let path = entry?.path();
                if path.is_file() && has_pdf_suffix(&path) {
                    pdf_files.push(path);
                }
            }
            pdf_files.sort();
        }
    }

    Ok(pdf_files)
}

// ============================================================
// Output Layout
// ============================================================

/// Output locations for one PDF
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLayout {
    /// `<output>/<name>/`
    pub dir: PathBuf,
    /// `<output>/<name>/<name>.docx`
    pub docx: PathBuf,
    /// `<output>/<name>/<name>_paragraphs.xlsx`
    pub xlsx: PathBuf,
}

impl OutputLayout {
    /// Derive the layout from the PDF's base name
    pub fn for_pdf(pdf: &Path, output_root: &Path) -> Self {
        let stem = pdf
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        let dir = output_root.join(&stem);
        Self {
            docx: dir.join(format!("{}.docx", stem)),
            xlsx: dir.join(format!("{}{}.xlsx", stem, XLSX_SUFFIX)),
            dir,
        }
    }
}

// ============================================================
// Results
// ============================================================

/// Successful processing of one PDF
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOutcome {
    /// Source PDF
    pub pdf: PathBuf,
    /// Where the outputs were written
    pub output: OutputLayout,
    /// Conversion details
    pub conversion: ConversionSummary,
    /// Fragments read back from the document
    pub fragments: usize,
    /// Paragraphs exported
    pub paragraphs: usize,
}

/// Failed processing of one PDF
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileFailure {
    /// Source PDF
    pub pdf: PathBuf,
    /// Error message
    pub error: String,
}

/// Error policy for folder batches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
    /// Record the failure and keep going
    #[default]
    ContinueOnError,
    /// Stop at the first failure
    FailFast,
}

/// Overall batch status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// No PDFs were found
    Empty,
    /// Every file succeeded
    Completed,
    /// Some files succeeded, some failed
    PartiallyCompleted,
    /// No file succeeded
    Failed,
}

impl std::fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchStatus::Empty => write!(f, "empty"),
            BatchStatus::Completed => write!(f, "completed"),
            BatchStatus::PartiallyCompleted => write!(f, "partially_completed"),
            BatchStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Per-file results of a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    /// Overall status
    pub status: BatchStatus,
    /// PDFs in the batch
    pub total: usize,
    /// Files processed successfully
    pub succeeded: Vec<FileOutcome>,
    /// Files that failed
    pub failed: Vec<FileFailure>,
    /// Files never attempted because the batch stopped early
    pub not_attempted: Vec<PathBuf>,
}

impl BatchReport {
    fn new(
        total: usize,
        succeeded: Vec<FileOutcome>,
        failed: Vec<FileFailure>,
        not_attempted: Vec<PathBuf>,
    ) -> Self {
        let status = if total == 0 {
            BatchStatus::Empty
        } else if succeeded.is_empty() {
            BatchStatus::Failed
        } else if failed.is_empty() && not_attempted.is_empty() {
            BatchStatus::Completed
        } else {
            BatchStatus::PartiallyCompleted
        };

        Self {
            status,
            total,
            succeeded,
            failed,
            not_attempted,
        }
    }

    /// True when every file succeeded
    pub fn is_success(&self) -> bool {
        self.status == BatchStatus::Completed
    }

    /// Total paragraphs exported across the batch
    pub fn total_paragraphs(&self) -> usize {
        self.succeeded.iter().map(|o| o.paragraphs).sum()
    }
}

// ============================================================
// Pipeline
// ============================================================

/// PDF → DOCX → paragraphs → XLSX pipeline
pub struct ParagraphPipeline<C = LopdfConverter, R = DocxReader, P = TerminalPunctuation> {
    converter: C,
    reader: R,
    reconstructor: ParagraphReconstructor<P>,
    exporter: XlsxExporter,
    config: PipelineConfig,
}

impl ParagraphPipeline {
    /// Create a pipeline with the built-in collaborators
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            converter: LopdfConverter::with_options(config.conversion.clone()),
            reader: DocxReader::new(),
            reconstructor: ParagraphReconstructor::new(),
            exporter: XlsxExporter::new(config.layout.clone()),
            config,
        }
    }
}

impl<C, R, P> ParagraphPipeline<C, R, P>
where
    C: PdfConverter,
    R: DocumentReader,
    P: BoundaryPolicy,
{
    /// Create a pipeline with custom collaborators
    pub fn with_components(config: PipelineConfig, converter: C, reader: R, policy: P) -> Self {
        Self {
            converter,
            reader,
            reconstructor: ParagraphReconstructor::with_policy(policy),
            exporter: XlsxExporter::new(config.layout.clone()),
            config,
        }
    }

    /// Effective configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Process a single PDF into its output folder
    pub fn process_file(
        &self,
        pdf: &Path,
        output_root: &Path,
        progress: &mut dyn ProgressCallback,
    ) -> Result<FileOutcome> {
        let output = OutputLayout::for_pdf(pdf, output_root);

        progress.on_stage(ProcessingStage::Initializing);
        std::fs::create_dir_all(&output.dir).map_err(|source| PipelineError::OutputDir {
            path: output.dir.clone(),
            source,
        })?;

        progress.on_stage(ProcessingStage::Converting);
        let conversion = self.converter.convert(pdf, &output.docx)?;
        progress.on_debug(&format!(
            "{} pages, {} document paragraphs",
            conversion.pages, conversion.paragraphs
        ));

        progress.on_stage(ProcessingStage::Extracting);
        let fragments = self.reader.read_fragments(&output.docx)?;

        progress.on_stage(ProcessingStage::Reconstructing);
        let paragraphs = self.reconstructor.reconstruct(&fragments);
        progress.on_debug(&format!(
            "{} fragments merged into {} paragraphs",
            fragments.len(),
            paragraphs.len()
        ));

        progress.on_stage(ProcessingStage::Exporting);
        self.exporter.export(&paragraphs, &output.xlsx)?;

        Ok(FileOutcome {
            pdf: pdf.to_path_buf(),
            output,
            conversion,
            fragments: fragments.len(),
            paragraphs: paragraphs.len(),
        })
    }

    /// Process PDFs in order, applying the configured [`BatchPolicy`]
    ///
    /// Outputs of files that finished before a failure stay on disk. A PDF
    /// whose output folder was already written by an earlier file in the
    /// batch (`a.pdf` and `a.PDF`) fails instead of overwriting it.
    pub fn process_batch(
        &self,
        pdfs: &[PathBuf],
        output_root: &Path,
        progress: &mut dyn ProgressCallback,
    ) -> BatchReport {
        let total = pdfs.len();
        let mut succeeded = Vec::new();
        let mut failed = Vec::new();
        let mut not_attempted = Vec::new();
        let mut written: HashMap<PathBuf, PathBuf> = HashMap::new();

        for (idx, pdf) in pdfs.iter().enumerate() {
            progress.on_file_start(idx + 1, total, pdf);

            let dir = OutputLayout::for_pdf(pdf, output_root).dir;
            let result = match written.get(&dir) {
                Some(earlier) => Err(PipelineError::OutputConflict {
                    dir,
                    earlier: earlier.clone(),
                }),
                None => self.process_file(pdf, output_root, progress),
            };

            match result {
                Ok(outcome) => {
                    written.insert(outcome.output.dir.clone(), pdf.clone());
                    tracing::info!(pdf = %pdf.display(), paragraphs = outcome.paragraphs, "processed");
                    progress.on_file_complete(outcome.paragraphs, None);
                    succeeded.push(outcome);
                }
                Err(e) => {
                    let error = e.to_string();
                    tracing::warn!(pdf = %pdf.display(), error = %error, "failed");
                    progress.on_file_complete(0, Some(&error));
                    failed.push(FileFailure {
                        pdf: pdf.clone(),
                        error,
                    });

                    if self.config.batch_policy == BatchPolicy::FailFast {
                        not_attempted.extend(pdfs[idx + 1..].iter().cloned());
                        break;
                    }
                }
            }
        }

        BatchReport::new(total, succeeded, failed, not_attempted)
    }
}
