use std::path::PathBuf;

use clap::Args;

use crate::cli::{format_list, load_config, OutputFormat};
use crate::core::sequence::Sequence;
use crate::matching::{SearchAlgorithm, SearchConfig, SearchEngine, SearchReport};
use crate::parsing::fasta::read_genome;

/// Offsets shown in text output before the list is cut short
const MAX_LISTED_OFFSETS: usize = 20;

#[derive(Args)]
pub struct SearchArgs {
    /// Reference FASTA file (optionally gzip compressed)
    #[arg(required = true)]
    pub reference: PathBuf,

    /// Pattern to search for (A, C, G, T, N)
    #[arg(required = true)]
    pub pattern: String,

    /// Search strategy [default: naive]
    #[arg(short, long, value_enum)]
    pub algorithm: Option<SearchAlgorithm>,

    /// Maximum substitutions for kmer, subsequence and mismatch searches [default: 2]
    #[arg(short, long)]
    pub mismatches: Option<usize>,

    /// Index key length [default: 8]
    #[arg(short)]
    pub k: Option<usize>,

    /// Subsequence index stride [default: 3]
    #[arg(long)]
    pub ival: Option<usize>,

    /// JSON file with search settings; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl SearchArgs {
    fn resolve_config(&self) -> anyhow::Result<SearchConfig> {
        let mut config: SearchConfig = load_config(self.config.as_deref())?;
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(mismatches) = self.mismatches {
            config.max_mismatches = mismatches;
        }
        if let Some(k) = self.k {
            config.k = k;
        }
        if let Some(ival) = self.ival {
            config.ival = ival;
        }
        Ok(config)
    }
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if the inputs cannot be read or the search is rejected.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.resolve_config()?;
    let pattern: Sequence = args
        .pattern
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid pattern: {e}"))?;
    let reference = read_genome(&args.reference)?;

    if verbose {
        eprintln!(
            "Searching {} bp reference for a {} bp pattern with {}",
            reference.len(),
            pattern.len(),
            config.algorithm
        );
    }

    let engine = SearchEngine::new(&reference, config)?;
    let report = engine.search(&pattern)?;

    match format {
        OutputFormat::Text => print_text_report(&args, &reference, engine.config(), &report),
        OutputFormat::Json => print_json_report(&args, &reference, engine.config(), &report)?,
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn print_text_report(
    args: &SearchArgs,
    reference: &Sequence,
    config: &SearchConfig,
    report: &SearchReport,
) {
    println!("Search Results");
    println!("{}", "=".repeat(60));

    println!("\nReference: {}", args.reference.display());
    println!("  Length: {} bp", reference.len());
    println!("Pattern: {}", args.pattern.to_ascii_uppercase());
    println!("Algorithm: {}", report.algorithm);
    if matches!(
        report.algorithm,
        SearchAlgorithm::Kmer | SearchAlgorithm::Subsequence | SearchAlgorithm::Mismatch
    ) {
        println!("  Max mismatches: {}", config.max_mismatches);
    }
    if report.algorithm.is_indexed() {
        println!("  k: {}", config.k);
    }
    if report.algorithm == SearchAlgorithm::Subsequence {
        println!("  ival: {}", config.ival);
    }

    if let Some(distance) = report.edit_distance {
        println!("\nBest edit distance: {distance}");
        println!(
            "End offsets: {}",
            format_list(&report.hits.occurrences, MAX_LISTED_OFFSETS)
        );
    } else {
        println!("\nOccurrences: {}", report.hits.occurrences.len());
        if let Some(first) = report.hits.first() {
            println!("  Leftmost: {first}");
            println!(
                "  Offsets: {}",
                format_list(&report.hits.occurrences, MAX_LISTED_OFFSETS)
            );
        }
    }

    let counters = &report.hits.counters;
    println!("\nWork:");
    println!("  Alignments tried: {}", counters.alignments_tried);
    println!("  Character comparisons: {}", counters.character_comparisons);
    if report.algorithm.is_indexed() {
        println!("  Index hits: {}", counters.index_hits);
    }
}

fn print_json_report(
    args: &SearchArgs,
    reference: &Sequence,
    config: &SearchConfig,
    report: &SearchReport,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "reference": {
            "path": args.reference.display().to_string(),
            "length": reference.len(),
        },
        "pattern": args.pattern.to_ascii_uppercase(),
        "config": config,
        "result": report,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_report(report: &SearchReport) {
    println!("algorithm\toccurrences\tleftmost\talignments_tried\tcharacter_comparisons\tindex_hits");
    let counters = &report.hits.counters;
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        report.algorithm,
        report.hits.occurrences.len(),
        report
            .hits
            .first()
            .map_or_else(|| "-".to_string(), |o| o.to_string()),
        counters.alignments_tried,
        counters.character_comparisons,
        counters.index_hits,
    );
}
