use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::fastq::read_fastq;
use crate::parsing::quality::{lowest_total_position, per_position_totals, quality_histogram};

#[derive(Args)]
pub struct QualityArgs {
    /// FASTQ file of reads (optionally gzip compressed)
    #[arg(required = true)]
    pub reads: PathBuf,
}

/// Execute quality subcommand
///
/// # Errors
///
/// Returns an error if the reads cannot be parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: QualityArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reads = read_fastq(&args.reads)?;
    if verbose {
        eprintln!("Parsed {} reads", reads.len());
    }

    let histogram = quality_histogram(&reads.qualities);
    let totals = per_position_totals(&reads.qualities);
    let weakest = lowest_total_position(&totals);

    match format {
        OutputFormat::Text => {
            println!("Quality Summary");
            println!("{}", "=".repeat(60));
            println!("\nReads: {} ({})", reads.len(), args.reads.display());
            println!("Cycles: {}", totals.len());
            if let Some((position, total)) = weakest {
                println!("Lowest total quality: {total} at cycle {position} (0-based)");
            }
            println!("\nHistogram (Q: bases):");
            for (q, count) in histogram.iter().enumerate().filter(|&(_, &c)| c > 0) {
                println!("  {q:>2}: {count}");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "reads": reads.len(),
                "histogram": histogram.to_vec(),
                "per_position_totals": totals,
                "lowest_total_position": weakest.map(|(p, _)| p),
                "lowest_total": weakest.map(|(_, t)| t),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("quality\tcount");
            for (q, count) in histogram.iter().enumerate() {
                println!("{q}\t{count}");
            }
        }
    }

    Ok(())
}
