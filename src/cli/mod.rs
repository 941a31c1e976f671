//! Command-line interface for seqscan.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Find a pattern in a reference genome
//! - **distance**: Edit or Hamming distance between two strings
//! - **overlaps**: Suffix/prefix overlaps between reads
//! - **assemble**: Assemble reads into a shortest common superstring
//! - **quality**: Base quality summary of a FASTQ file
//!
//! ## Usage
//!
//! ```text
//! # Exact Boyer-Moore search
//! seqscan search phix.fa GATTACA --algorithm boyer-moore
//!
//! # Up to 2 mismatches with a k-mer index, JSON output for scripting
//! seqscan search chr1.fa.gz GGCGCGGTGGCTCACGCCTGTAAT -a kmer -m 2 -k 8 --format json
//!
//! # Greedy assembly with a minimum overlap of 30
//! seqscan assemble reads.fastq -k 30
//! ```

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

pub mod assemble;
pub mod distance;
pub mod overlaps;
pub mod quality;
pub mod search;

#[derive(Parser)]
#[command(name = "seqscan")]
#[command(version)]
#[command(about = "Approximate sequence search and read assembly")]
#[command(
    long_about = "seqscan locates short patterns in a reference genome and reconstructs sequences from overlapping reads.\n\nIt provides:\n- Exact search (naive, Boyer-Moore) and bounded-mismatch search backed by k-mer or subsequence indexes\n- Edit distance and end-free approximate matching\n- Overlap detection and greedy or exact shortest common superstring assembly"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find a pattern in a reference genome
    Search(search::SearchArgs),

    /// Edit or Hamming distance between two strings
    Distance(distance::DistanceArgs),

    /// Suffix/prefix overlaps between the reads of a FASTQ file
    Overlaps(overlaps::OverlapsArgs),

    /// Assemble the reads of a FASTQ file
    Assemble(assemble::AssembleArgs),

    /// Base quality summary of a FASTQ file
    Quality(quality::QualityArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a JSON config file, or the default config when no path is given.
fn load_config<T: DeserializeOwned + Default>(path: Option<&Path>) -> anyhow::Result<T> {
    let Some(path) = path else {
        return Ok(T::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))
}

/// Comma-separated list of at most `limit` values, noting how many were cut
fn format_list(values: &[usize], limit: usize) -> String {
    let shown: Vec<String> = values.iter().take(limit).map(ToString::to_string).collect();
    if values.len() > limit {
        format!("{}, ... ({} more)", shown.join(", "), values.len() - limit)
    } else {
        shown.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::SearchConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_default() {
        let config: SearchConfig = load_config(None).unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_load_config_file() {
        let mut temp = NamedTempFile::with_suffix(".json").unwrap();
        temp.write_all(br#"{"max_mismatches": 1}"#).unwrap();
        temp.flush().unwrap();

        let config: SearchConfig = load_config(Some(temp.path())).unwrap();
        assert_eq!(config.max_mismatches, 1);

        let mut bad = NamedTempFile::with_suffix(".json").unwrap();
        bad.write_all(b"{not json").unwrap();
        bad.flush().unwrap();
        assert!(load_config::<SearchConfig>(Some(bad.path())).is_err());
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[1, 2, 3], 5), "1, 2, 3");
        assert_eq!(format_list(&[1, 2, 3], 2), "1, 2, ... (1 more)");
        assert_eq!(format_list(&[], 2), "");
    }
}
