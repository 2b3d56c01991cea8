//! Command layer between a front end and the pipeline
//!
//! A front end (the CLI here) collects an input path, an output folder and
//! an input mode, then hands them to a [`ConvertCommand`]. The command
//! validates before anything is written and yields a [`ConversionPlan`];
//! running the plan returns a [`BatchReport`] for the front end to render.
//! Neither holds state between runs.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::document::{DocumentReader, PdfConverter};
use crate::paragraph::BoundaryPolicy;
use crate::pipeline::{
    collect_pdf_files, has_pdf_suffix, BatchReport, InputMode, OutputLayout, ParagraphPipeline,
    PipelineError,
};
use crate::progress::ProgressCallback;

/// Input validation errors, reported before any processing starts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select both input and output paths (input is empty)")]
    MissingInput,

    #[error("Please select both input and output paths (output is empty)")]
    MissingOutput,

    #[error("Selected file is not a PDF: {0}")]
    NotPdf(PathBuf),

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Input is not a folder: {0}")]
    NotADirectory(PathBuf),

    #[error("Output path is not a folder: {0}")]
    OutputNotADirectory(PathBuf),
}

/// Command errors
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// A single conversion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertCommand {
    /// PDF file or folder of PDFs
    pub input: PathBuf,
    /// Output root folder
    pub output: PathBuf,
    /// How to interpret `input`
    pub mode: InputMode,
}

impl ConvertCommand {
    /// Create a command
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, mode: InputMode) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            mode,
        }
    }

    /// Check the paths without touching the filesystem beyond metadata reads
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.input.as_os_str().is_empty() {
            return Err(ValidationError::MissingInput);
        }
        if self.output.as_os_str().is_empty() {
            return Err(ValidationError::MissingOutput);
        }

        match self.mode {
            InputMode::File => {
                if !has_pdf_suffix(&self.input) {
                    return Err(ValidationError::NotPdf(self.input.clone()));
                }
                if !self.input.is_file() {
                    return Err(ValidationError::InputNotFound(self.input.clone()));
                }
            }
            InputMode::Folder => {
                if !self.input.exists() {
                    return Err(ValidationError::InputNotFound(self.input.clone()));
                }
                if !self.input.is_dir() {
                    return Err(ValidationError::NotADirectory(self.input.clone()));
                }
            }
        }

        if self.output.exists() && !self.output.is_dir() {
            return Err(ValidationError::OutputNotADirectory(self.output.clone()));
        }

        Ok(())
    }

    /// Validate and collect the PDFs this command would process
    pub fn plan(&self) -> Result<ConversionPlan, ShellError> {
        self.validate()?;
        let pdf_files = collect_pdf_files(&self.input, self.mode)?;
        tracing::debug!(
            input = %self.input.display(),
            mode = %self.mode,
            files = pdf_files.len(),
            "planned conversion"
        );
        Ok(ConversionPlan {
            output: self.output.clone(),
            pdf_files,
        })
    }
}

/// A validated command with its input PDFs listed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionPlan {
    /// Output root folder
    pub output: PathBuf,
    /// PDFs to process, in order
    pub pdf_files: Vec<PathBuf>,
}

impl ConversionPlan {
    /// True when there is nothing to convert
    pub fn is_empty(&self) -> bool {
        self.pdf_files.is_empty()
    }

    /// Output locations, one per PDF
    pub fn layouts(&self) -> Vec<OutputLayout> {
        self.pdf_files
            .iter()
            .map(|pdf| OutputLayout::for_pdf(pdf, &self.output))
            .collect()
    }

    /// Run the pipeline over every planned PDF
    pub fn run<C, R, P>(
        &self,
        pipeline: &ParagraphPipeline<C, R, P>,
        progress: &mut dyn ProgressCallback,
    ) -> BatchReport
    where
        C: PdfConverter,
        R: DocumentReader,
        P: BoundaryPolicy,
    {
        tracing::info!(
            output = %self.output.display(),
            files = self.pdf_files.len(),
            "starting conversion"
        );
        pipeline.process_batch(&self.pdf_files, &self.output, progress)
    }
}
