use std::path::PathBuf;

use clap::Args;

use crate::assembly::overlap::{naive_overlap_map, overlap_map, reads_with_outgoing_overlap};
use crate::assembly::OverlapRecord;
use crate::cli::OutputFormat;
use crate::parsing::fastq::read_fastq;

/// Records shown in text output
const MAX_LISTED_RECORDS: usize = 10;

#[derive(Args)]
pub struct OverlapsArgs {
    /// FASTQ file of reads (optionally gzip compressed)
    #[arg(required = true)]
    pub reads: PathBuf,

    /// Minimum overlap length
    #[arg(short, required = true)]
    pub k: usize,

    /// Test every ordered pair instead of filtering candidates by k-mer
    #[arg(long)]
    pub naive: bool,
}

/// Execute overlaps subcommand
///
/// # Errors
///
/// Returns an error if the reads cannot be parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: OverlapsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reads = read_fastq(&args.reads)?;
    if verbose {
        eprintln!(
            "Parsed {} reads ({} distinct)",
            reads.len(),
            reads.distinct_sequences()
        );
    }

    let records = if args.naive {
        naive_overlap_map(&reads.sequences, args.k)
    } else {
        overlap_map(&reads.sequences, args.k)
    };
    let with_overlap = reads_with_outgoing_overlap(&records);

    match format {
        OutputFormat::Text => print_text_overlaps(&args, reads.len(), &records, with_overlap),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "reads": reads.len(),
                "min_length": args.k,
                "overlap_count": records.len(),
                "reads_with_outgoing_overlap": with_overlap,
                "overlaps": records,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("read_a\tread_b\tlength");
            for r in &records {
                println!("{}\t{}\t{}", r.read_a, r.read_b, r.length);
            }
        }
    }

    Ok(())
}

fn print_text_overlaps(
    args: &OverlapsArgs,
    read_count: usize,
    records: &[OverlapRecord],
    with_overlap: usize,
) {
    println!("Overlap Results");
    println!("{}", "=".repeat(60));

    println!("\nReads: {} ({})", read_count, args.reads.display());
    println!("Minimum overlap: {}", args.k);
    println!("Overlapping pairs: {}", records.len());
    println!("Reads with an outgoing overlap: {with_overlap}");

    if !records.is_empty() {
        println!("\nLongest overlaps (read indices are 0-based):");
        let mut longest: Vec<&OverlapRecord> = records.iter().collect();
        longest.sort_by(|x, y| y.length.cmp(&x.length).then(x.cmp(y)));
        for r in longest.iter().take(MAX_LISTED_RECORDS) {
            println!("  {} -> {}: {}", r.read_a, r.read_b, r.length);
        }
        if records.len() > MAX_LISTED_RECORDS {
            println!("  ... ({} more)", records.len() - MAX_LISTED_RECORDS);
        }
    }
}
