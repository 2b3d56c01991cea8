//! pdf-paragraphs - PDF to paragraph spreadsheet converter
//!
//! CLI entry point

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use pdf_paragraphs::{
    exit_codes, BatchReport, BatchStatus, Cli, Commands, Config, ConversionPlan, ConvertArgs,
    ConvertCommand, OutputLayout, OutputMode, ParagraphPipeline, PipelineConfig, PipelineError,
    ProgressTracker, ShellError, ValidationError,
};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert(args) => run_convert(&args),
        Commands::Info => run_info(),
    };

    std::process::exit(match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_codes::GENERAL_ERROR
        }
    });
}

/// Install the tracing subscriber; `RUST_LOG` wins over the verbosity flags
fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pdf_paragraphs={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// ============ Convert Command ============

fn run_convert(args: &ConvertArgs) -> anyhow::Result<i32> {
    init_tracing(args.verbose, args.quiet);
    let start_time = Instant::now();

    let command = ConvertCommand::new(&args.input, &args.output, args.effective_mode());

    let plan = match command.plan() {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(exit_code_for(&e));
        }
    };
    if plan.is_empty() {
        eprintln!("Error: No PDF files found in input path");
        return Ok(exit_codes::INPUT_NOT_FOUND);
    }

    // Config file errors are fatal only when the file was named explicitly
    let file_config = match &args.config {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config file: {}", e);
            Config::default()
        }),
    };
    let pipeline_config = file_config.merge_with_cli(&args.overrides());

    if args.dry_run {
        if args.json {
            let dry_run = DryRunReport {
                config: &pipeline_config,
                files: plan.layouts(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&dry_run).context("serializing plan")?
            );
        } else {
            print_execution_plan(args, &plan, &pipeline_config);
        }
        return Ok(exit_codes::SUCCESS);
    }

    let pipeline = ParagraphPipeline::new(pipeline_config);
    let output_mode = if args.quiet || args.json {
        OutputMode::Quiet
    } else {
        OutputMode::from_verbosity(args.verbose)
    };
    let mut progress = ProgressTracker::new(plan.pdf_files.len(), output_mode);
    let report = plan.run(&pipeline, &mut progress);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
    } else if !args.quiet {
        print_report(&report);
        println!("Total time: {:.2}s", start_time.elapsed().as_secs_f64());
    }

    Ok(match report.status {
        BatchStatus::Completed => exit_codes::SUCCESS,
        BatchStatus::Empty => exit_codes::INPUT_NOT_FOUND,
        BatchStatus::PartiallyCompleted | BatchStatus::Failed => exit_codes::PARTIAL_FAILURE,
    })
}

/// `--dry-run --json` output
#[derive(Serialize)]
struct DryRunReport<'a> {
    config: &'a PipelineConfig,
    files: Vec<OutputLayout>,
}

fn exit_code_for(error: &ShellError) -> i32 {
    match error {
        ShellError::Validation(ValidationError::InputNotFound(_))
        | ShellError::Pipeline(PipelineError::InputNotFound(_)) => exit_codes::INPUT_NOT_FOUND,
        ShellError::Validation(_) => exit_codes::INVALID_ARGS,
        ShellError::Pipeline(_) => exit_codes::GENERAL_ERROR,
    }
}

fn print_report(report: &BatchReport) {
    ProgressTracker::print_summary(report.total, report.succeeded.len(), report.failed.len());

    for outcome in &report.succeeded {
        println!(
            "  OK    {} -> {} ({} paragraphs)",
            outcome.pdf.display(),
            outcome.output.xlsx.display(),
            outcome.paragraphs
        );
    }
    for failure in &report.failed {
        println!("  FAIL  {}: {}", failure.pdf.display(), failure.error);
    }
    for pdf in &report.not_attempted {
        println!("  SKIP  {} (batch stopped)", pdf.display());
    }

    match report.status {
        BatchStatus::Completed => println!("Conversion completed successfully!"),
        BatchStatus::PartiallyCompleted => println!("Conversion finished with errors."),
        BatchStatus::Failed => println!("Conversion failed."),
        BatchStatus::Empty => println!("Nothing to convert."),
    }
}

/// Print execution plan for dry-run mode
fn print_execution_plan(args: &ConvertArgs, plan: &ConversionPlan, config: &PipelineConfig) {
    println!("=== Dry Run - Execution Plan ===");
    println!();
    println!("Input: {} ({})", args.input.display(), args.effective_mode());
    println!("Output: {}", args.output.display());
    println!("Files to process: {}", plan.pdf_files.len());
    println!();
    println!("Pipeline Configuration:");
    println!(
        "  1. PDF to DOCX (grouping: {}, page breaks: {})",
        config.conversion.grouping,
        if config.conversion.page_breaks { "YES" } else { "NO" }
    );
    println!("  2. Paragraph extraction");
    println!("  3. Paragraph reconstruction (terminal punctuation)");
    println!(
        "  4. XLSX export (sheet: {}, widths: {}/{}, row height: {}, wrap: {})",
        config.layout.sheet_name,
        config.layout.ordinal_width,
        config.layout.paragraph_width,
        config.layout.row_height,
        if config.layout.wrap_text { "YES" } else { "NO" }
    );
    println!("  Batch policy: {:?}", config.batch_policy);
    println!();
    println!("Files:");
    for (i, (file, layout)) in plan.pdf_files.iter().zip(plan.layouts()).enumerate() {
        println!("  {}. {}", i + 1, file.display());
        println!("     -> {}", layout.docx.display());
        println!("     -> {}", layout.xlsx.display());
    }
}

// ============ Info Command ============

fn run_info() -> anyhow::Result<i32> {
    println!("pdf-paragraphs v{}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("System Information:");
    println!("  Platform: {}", std::env::consts::OS);
    println!("  Arch: {}", std::env::consts::ARCH);

    println!();
    println!("Config File Locations:");
    for path in Config::search_paths() {
        println!("  {} ({})", path.display(), describe(&path));
    }

    Ok(exit_codes::SUCCESS)
}

fn describe(path: &Path) -> &'static str {
    if path.is_file() {
        "found"
    } else {
        "not found"
    }
}
