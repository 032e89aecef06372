//! cyan-codegen CLI
//!
//! Generates C++ component headers, ChaiScript bindings, x-lists, include
//! lists and a CMake source manifest from a directory of JSON schemas:
//!
//! ```bash
//! cyan-codegen --input cyan/codegen --output build/cyan/generated
//! ```
//!
//! Per-file problems (bad schema, refusing to overwrite a hand-written file)
//! are reported and skipped; the run always completes.

use anyhow::{Context, Result};
use clap::Parser;
use cyan_codegen::{GenerationReport, Generator, GeneratorConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cyan-codegen")]
#[command(author, version, about = "Generate C++ code from .json schema files", long_about = None)]
struct Cli {
    /// Directory to scan for schema files
    #[arg(short, long)]
    input: PathBuf,

    /// Directory to write generated files to
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if !cli.input.is_dir() {
        anyhow::bail!("Input directory not found: {}", cli.input.display());
    }

    let config = GeneratorConfig::discover(&cli.input)
        .with_context(|| format!("Failed to load config from {}", cli.input.display()))?;

    tracing::info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        "running codegen"
    );
    let report = Generator::new(config, &cli.output)
        .run_dir(&cli.input)
        .with_context(|| format!("Failed to scan {}", cli.input.display()))?;

    print_summary(&report);

    Ok(())
}

fn print_summary(report: &GenerationReport) {
    println!(
        "codegen complete (generated {} files):",
        report.generated.len()
    );
    for (i, path) in report.generated.iter().enumerate() {
        println!("    {}\t\"{}\"", i + 1, path.display());
    }

    if let Some(manifest) = &report.manifest {
        println!("Manifest: {}", manifest.display());
    }

    if !report.is_clean() {
        println!("\n{} error(s):", report.failures.len());
        for failure in &report.failures {
            println!("    ERROR: {failure}");
        }
    }
}
