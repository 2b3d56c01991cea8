//! Command-line interface definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::CliOverrides;
use crate::document::LineGrouping;
use crate::pipeline::InputMode;

/// Convert PDFs into paragraph-per-row spreadsheets
#[derive(Debug, Parser)]
#[command(name = "pdf-paragraphs", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a PDF file or a folder of PDFs
    Convert(ConvertArgs),
    /// Show version and configuration locations
    Info,
}

/// Arguments for `convert`
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// PDF file or folder containing PDFs
    pub input: PathBuf,

    /// Output folder (one subfolder per PDF is created inside)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Treat the input as a single file or a folder (detected when omitted)
    #[arg(short, long, value_enum)]
    pub mode: Option<InputMode>,

    /// Config file (defaults to ./pdf-paragraphs.toml or the user config)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Group lines into blank-line separated blocks instead of one paragraph per line
    #[arg(long)]
    pub blocks: bool,

    /// Do not insert page breaks into the intermediate document
    #[arg(long)]
    pub no_page_breaks: bool,

    /// Worksheet name
    #[arg(long)]
    pub sheet_name: Option<String>,

    /// Width of the paragraph column
    #[arg(long)]
    pub paragraph_width: Option<f64>,

    /// Height of each data row
    #[arg(long)]
    pub row_height: Option<f64>,

    /// Stop at the first file that fails
    #[arg(long)]
    pub fail_fast: bool,

    /// Show what would be done without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the batch report as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl ConvertArgs {
    /// Effective input mode
    pub fn effective_mode(&self) -> InputMode {
        self.mode.unwrap_or_else(|| InputMode::detect(&self.input))
    }

    /// Overrides for values set explicitly on the command line
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            grouping: self.blocks.then_some(LineGrouping::Block),
            page_breaks: self.no_page_breaks.then_some(false),
            sheet_name: self.sheet_name.clone(),
            paragraph_width: self.paragraph_width,
            row_height: self.row_height,
            fail_fast: self.fail_fast.then_some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ConvertArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Convert(args) => args,
            Commands::Info => panic!("expected convert"),
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_minimal() {
        let args = parse(&["pdf-paragraphs", "convert", "in.pdf", "-o", "out"]);
        assert_eq!(args.input, PathBuf::from("in.pdf"));
        assert_eq!(args.output, PathBuf::from("out"));
        assert!(args.mode.is_none());
        assert_eq!(args.overrides(), CliOverrides::default());
    }

    #[test]
    fn test_parse_mode_and_flags() {
        let args = parse(&[
            "pdf-paragraphs",
            "convert",
            "docs",
            "--output",
            "out",
            "--mode",
            "folder",
            "--blocks",
            "--no-page-breaks",
            "--fail-fast",
            "--sheet-name",
            "Book",
            "-vv",
        ]);
        assert_eq!(args.mode, Some(InputMode::Folder));
        assert_eq!(args.effective_mode(), InputMode::Folder);
        assert_eq!(args.verbose, 2);

        let overrides = args.overrides();
        assert_eq!(overrides.grouping, Some(LineGrouping::Block));
        assert_eq!(overrides.page_breaks, Some(false));
        assert_eq!(overrides.fail_fast, Some(true));
        assert_eq!(overrides.sheet_name.as_deref(), Some("Book"));
    }

    #[test]
    fn test_output_required() {
        assert!(Cli::try_parse_from(["pdf-paragraphs", "convert", "in.pdf"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(
            Cli::try_parse_from(["pdf-paragraphs", "convert", "in.pdf", "-o", "out", "-q", "-v"])
                .is_err()
        );
    }
}
