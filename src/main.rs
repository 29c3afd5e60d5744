mod format;
mod parser;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;
use tracing::{info, warn};

use parser::SectionRecord;

/// Input suffix → output suffix mapping for the derived output filename.
const OUTPUT_SUFFIX_MAP: (&str, &str) = (".json", "_processed.txt");
const PREVIEW_LIMIT: usize = 5;

#[derive(Parser)]
#[command(
    name = "klms_processor",
    about = "Convert a KLMS course export into timetable-generator records"
)]
struct Cli {
    /// Path to the KLMS export file
    input: PathBuf,
}

#[derive(Debug, Error)]
enum ProcessError {
    #[error("file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    // Best-effort contract: processing failures are reported on the
    // console but still exit 0.
    if let Err(err) = run(&cli.input) {
        match err {
            ProcessError::InputNotFound(_) => println!("Error: {err}"),
            ProcessError::Io(err) => println!("Error while processing: {err}"),
        }
    }
}

fn run(input: &Path) -> Result<(), ProcessError> {
    if !input.exists() {
        return Err(ProcessError::InputNotFound(input.to_path_buf()));
    }

    println!("Processing file: {}", input.display());
    let raw = fs::read_to_string(input)?;
    let records = parser::parse_document(&raw);
    println!("Parsed {} section records", records.len());
    info!(records = records.len(), "parse complete");

    let output = derive_output_path(input);
    if output == input {
        warn!(path = %input.display(), "derived output path equals input path; input will be overwritten");
    }
    fs::write(&output, format::format_records(&records))?;
    println!("Done. Output written to {}", output.display());

    print_preview(&records);
    Ok(())
}

/// Derive the output path by suffix substitution. An input without the
/// mapped suffix keeps its name unchanged, so the output lands on top
/// of the input; `run` warns when that happens.
fn derive_output_path(input: &Path) -> PathBuf {
    let (from, to) = OUTPUT_SUFFIX_MAP;
    let name = input.to_string_lossy();
    match name.strip_suffix(from) {
        Some(stem) => PathBuf::from(format!("{stem}{to}")),
        None => input.to_path_buf(),
    }
}

fn print_preview(records: &[SectionRecord]) {
    println!("\nFirst {PREVIEW_LIMIT} records preview:");
    println!("{}", "=".repeat(50));
    for record in records.iter().take(PREVIEW_LIMIT) {
        println!("{}", format::render_record(record));
        println!();
    }
    if records.len() > PREVIEW_LIMIT {
        println!("... and {} more records", records.len() - PREVIEW_LIMIT);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

// ── Tests ──
