use std::path::PathBuf;

use clap::Args;

use crate::assembly::{assemble, Assembly, AssemblyConfig, AssemblyStrategy};
use crate::cli::{load_config, OutputFormat};
use crate::core::sequence::ALPHABET;
use crate::parsing::fastq::read_fastq;
use crate::utils::validation::sequence_md5;

#[derive(Args)]
pub struct AssembleArgs {
    /// FASTQ file of reads (optionally gzip compressed)
    #[arg(required = true)]
    pub reads: PathBuf,

    /// Minimum overlap length for a merge [default: 3]
    #[arg(short)]
    pub k: Option<usize>,

    /// Assembly strategy [default: greedy]
    #[arg(short, long, value_enum)]
    pub strategy: Option<AssemblyStrategy>,

    /// JSON file with assembly settings; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the assembled sequence in text output
    #[arg(long)]
    pub show_sequence: bool,
}

impl AssembleArgs {
    fn resolve_config(&self) -> anyhow::Result<AssemblyConfig> {
        let mut config: AssemblyConfig = load_config(self.config.as_deref())?;
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(k) = self.k {
            config.min_overlap = k;
        }
        Ok(config)
    }
}

/// Execute assemble subcommand
///
/// # Errors
///
/// Returns an error if the reads cannot be parsed or the strategy refuses
/// the input size.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AssembleArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.resolve_config()?;
    let reads = read_fastq(&args.reads)?;

    if verbose {
        eprintln!(
            "Assembling {} reads ({} distinct) with {:?}, minimum overlap {}",
            reads.len(),
            reads.distinct_sequences(),
            config.strategy,
            config.min_overlap
        );
    }

    let read_count = reads.len();
    let assembly = assemble(reads.sequences, &config)?;
    let md5 = sequence_md5(&assembly.sequence);

    match format {
        OutputFormat::Text => print_text_assembly(&args, read_count, &assembly, &md5),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "reads": read_count,
                "config": config,
                "length": assembly.sequence.len(),
                "base_counts": base_count_map(&assembly),
                "md5": md5,
                "merge_count": assembly.merges.len(),
                "contig_count": assembly.contigs.len(),
                "sequence": assembly.sequence,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            let counts = assembly.sequence.base_counts();
            println!("length\tA\tC\tG\tT\tN\tmerges\tcontigs\tmd5");
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{md5}",
                assembly.sequence.len(),
                counts[0],
                counts[1],
                counts[2],
                counts[3],
                counts[4],
                assembly.merges.len(),
                assembly.contigs.len(),
            );
        }
    }

    Ok(())
}

fn base_count_map(assembly: &Assembly) -> serde_json::Map<String, serde_json::Value> {
    ALPHABET
        .iter()
        .zip(assembly.sequence.base_counts())
        .map(|(&base, count)| (char::from(base).to_string(), count.into()))
        .collect()
}

fn print_text_assembly(args: &AssembleArgs, read_count: usize, assembly: &Assembly, md5: &str) {
    println!("Assembly Results");
    println!("{}", "=".repeat(60));

    println!("\nReads: {} ({})", read_count, args.reads.display());
    println!("Merges: {}", assembly.merges.len());
    println!("Contigs joined: {}", assembly.contigs.len());

    println!("\nSequence:");
    println!("  Length: {}", assembly.sequence.len());
    let counts = assembly.sequence.base_counts();
    for (base, count) in ALPHABET.iter().zip(counts) {
        println!("  {}: {count}", char::from(*base));
    }
    println!("  MD5: {md5}");

    if args.show_sequence {
        println!("\n{}", assembly.sequence);
    }
}
