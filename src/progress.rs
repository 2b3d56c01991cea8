//! Progress tracking module for PDF processing.
//!
//! Provides the callback the pipeline reports through and a console
//! tracker that renders it.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

/// Processing stages for a single PDF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingStage {
    /// Initializing
    #[default]
    Initializing,
    /// Converting PDF to the intermediate document
    Converting,
    /// Extracting fragments from the intermediate document
    Extracting,
    /// Merging fragments into paragraphs
    Reconstructing,
    /// Writing the spreadsheet
    Exporting,
    /// Completed
    Completed,
}

impl ProcessingStage {
    /// Get the name of the stage
    pub fn name(&self) -> &'static str {
        match self {
            ProcessingStage::Initializing => "Initializing",
            ProcessingStage::Converting => "Converting",
            ProcessingStage::Extracting => "Extracting",
            ProcessingStage::Reconstructing => "Reconstructing",
            ProcessingStage::Exporting => "Exporting",
            ProcessingStage::Completed => "Completed",
        }
    }

    /// Get a short description of the stage
    pub fn description(&self) -> &'static str {
        match self {
            ProcessingStage::Initializing => "preparing output folder",
            ProcessingStage::Converting => "PDF to DOCX",
            ProcessingStage::Extracting => "reading paragraphs",
            ProcessingStage::Reconstructing => "merging paragraphs",
            ProcessingStage::Exporting => "writing XLSX",
            ProcessingStage::Completed => "done",
        }
    }

    /// Position of the stage in the per-file pipeline (1-based, 0 for bookends)
    pub fn step(&self) -> usize {
        match self {
            ProcessingStage::Initializing | ProcessingStage::Completed => 0,
            ProcessingStage::Converting => 1,
            ProcessingStage::Extracting => 2,
            ProcessingStage::Reconstructing => 3,
            ProcessingStage::Exporting => 4,
        }
    }
}

impl fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.description())
    }
}

/// Number of working stages per file
pub const STAGE_COUNT: usize = 4;

/// Output verbosity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// No output
    Quiet,
    /// Normal output (file headers and results)
    #[default]
    Normal,
    /// Verbose output (stage display)
    Verbose,
    /// Very verbose (debug messages)
    VeryVerbose,
}

impl OutputMode {
    /// Create OutputMode from verbosity level
    pub fn from_verbosity(level: u8) -> Self {
        match level {
            0 => OutputMode::Normal,
            1 => OutputMode::Verbose,
            _ => OutputMode::VeryVerbose,
        }
    }

    /// Check if output should be shown at this mode
    pub fn should_show(&self, required: OutputMode) -> bool {
        use OutputMode::*;
        match (self, required) {
            (Quiet, _) => false,
            (Normal, Quiet | Normal) => true,
            (Verbose, Quiet | Normal | Verbose) => true,
            (VeryVerbose, _) => true,
            _ => false,
        }
    }
}

/// Progress bar width in characters
const PROGRESS_BAR_WIDTH: usize = 40;

/// Build a progress bar string
pub fn build_progress_bar(percent: u8) -> String {
    let percent = percent.min(100);
    let filled = (percent as usize * PROGRESS_BAR_WIDTH) / 100;
    let empty = PROGRESS_BAR_WIDTH - filled;
    format!("[{}{}]", "=".repeat(filled), "-".repeat(empty))
}

// ============================================================
// Callback
// ============================================================

/// Receives progress events from the pipeline
pub trait ProgressCallback {
    /// A new file is about to be processed (`index` is 1-based)
    fn on_file_start(&mut self, index: usize, total: usize, pdf: &Path);

    /// The current file entered a new stage
    fn on_stage(&mut self, stage: ProcessingStage);

    /// The current file finished; `error` is set when it failed
    fn on_file_complete(&mut self, paragraphs: usize, error: Option<&str>);

    /// Diagnostic message
    fn on_debug(&mut self, _message: &str) {}
}

/// Callback that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressCallback for SilentProgress {
    fn on_file_start(&mut self, _index: usize, _total: usize, _pdf: &Path) {}
    fn on_stage(&mut self, _stage: ProcessingStage) {}
    fn on_file_complete(&mut self, _paragraphs: usize, _error: Option<&str>) {}
}

// ============================================================
// Console Tracker
// ============================================================

/// Console progress tracker for PDF processing
#[derive(Debug)]
pub struct ProgressTracker {
    /// Current file number (1-based)
    pub current_file: usize,
    /// Total number of files
    pub total_files: usize,
    /// Current filename
    pub current_filename: String,
    /// Current processing stage
    pub current_stage: ProcessingStage,
    /// Start time of the current file
    start_time: Instant,
    /// Output mode
    output_mode: OutputMode,
}

impl ProgressTracker {
    /// Create a new progress tracker
    pub fn new(total_files: usize, output_mode: OutputMode) -> Self {
        Self {
            current_file: 0,
            total_files,
            current_filename: String::new(),
            current_stage: ProcessingStage::Initializing,
            start_time: Instant::now(),
            output_mode,
        }
    }

    /// Start processing a new file
    pub fn start_file(&mut self, file_number: usize, filename: &str) {
        self.current_file = file_number;
        self.current_filename = filename.to_string();
        self.current_stage = ProcessingStage::Initializing;
        self.start_time = Instant::now();

        if self.output_mode.should_show(OutputMode::Normal) {
            self.print_file_header();
        }
    }

    /// Set the current processing stage
    pub fn set_stage(&mut self, stage: ProcessingStage) {
        self.current_stage = stage;

        if self.output_mode.should_show(OutputMode::Verbose) {
            self.print_stage();
        }
    }

    /// Mark the current file as complete
    pub fn complete_file(&mut self) {
        self.current_stage = ProcessingStage::Completed;

        if self.output_mode.should_show(OutputMode::Normal) {
            let elapsed = self.start_time.elapsed();
            println!("  Completed in {:.2}s", elapsed.as_secs_f64());
        }
    }

    /// Percentage of the current file's stages done
    pub fn stage_percent(&self) -> u8 {
        if self.current_stage == ProcessingStage::Completed {
            return 100;
        }
        ((self.current_stage.step().saturating_sub(1) * 100) / STAGE_COUNT) as u8
    }

    /// Print file header
    fn print_file_header(&self) {
        println!();
        println!("{}", "=".repeat(80));
        println!(
            "[File {}/{}] {}",
            self.current_file, self.total_files, self.current_filename
        );
        println!("{}", "=".repeat(80));
    }

    /// Print current stage
    fn print_stage(&self) {
        let percent = self.stage_percent();
        println!(
            "  {} {:3}% Stage: {}",
            build_progress_bar(percent),
            percent,
            self.current_stage
        );
        let _ = io::stdout().flush();
    }

    /// Print final summary
    pub fn print_summary(total_files: usize, ok_count: usize, error_count: usize) {
        println!();
        println!("{}", "=".repeat(80));
        println!("Processing Summary");
        println!("{}", "=".repeat(80));
        println!("  Total files:  {}", total_files);
        println!("  Succeeded:    {}", ok_count);
        println!("  Errors:       {}", error_count);
        println!("{}", "=".repeat(80));
        println!();
    }
}

impl ProgressCallback for ProgressTracker {
    fn on_file_start(&mut self, index: usize, total: usize, pdf: &Path) {
        self.total_files = total;
        let name = pdf
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| pdf.display().to_string());
        self.start_file(index, &name);
    }

    fn on_stage(&mut self, stage: ProcessingStage) {
        self.set_stage(stage);
    }

    fn on_file_complete(&mut self, paragraphs: usize, error: Option<&str>) {
        match error {
            None => {
                if self.output_mode.should_show(OutputMode::Normal) {
                    println!("  Paragraphs: {}", paragraphs);
                }
                self.complete_file();
            }
            Some(message) => {
                self.current_stage = ProcessingStage::Completed;
                if self.output_mode.should_show(OutputMode::Quiet) {
                    println!("  Failed: {}", message);
                }
            }
        }
    }

    fn on_debug(&mut self, message: &str) {
        if self.output_mode.should_show(OutputMode::VeryVerbose) {
            println!("    [DEBUG] {}", message);
        }
    }
}
