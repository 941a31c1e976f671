//! Readers for reference genomes and sequencing reads.
//!
//! - [`fasta`]: a reference genome, all records concatenated into one sequence
//! - [`fastq`]: reads with their base qualities
//! - [`quality`]: Phred+33 decoding and per-cycle quality summaries
//!
//! Files ending in `.gz` or `.bgz` are decompressed transparently.
//!
//! ## Example
//!
//! ```rust,no_run
//! use seqscan::parsing::{fasta::read_genome, fastq::read_fastq};
//! use std::path::Path;
//!
//! let genome = read_genome(Path::new("phix.fa")).unwrap();
//! let reads = read_fastq(Path::new("reads.fastq.gz")).unwrap();
//! println!("{} bp genome, {} reads", genome.len(), reads.len());
//! ```

pub mod fasta;
pub mod fastq;
pub mod quality;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;

use crate::core::sequence::SequenceError;
use crate::utils::validation::MAX_READS;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error("Too many reads: {0} exceeds maximum allowed ({MAX_READS})")]
    TooManyReads(usize),
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a file for buffered reading, decompressing gzip/bgzip by extension
fn open_buffered(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("reads.fastq.gz")));
        assert!(is_gzipped(Path::new("genome.fa.bgz")));
        assert!(is_gzipped(Path::new("/data/GENOME.FA.GZ")));
        assert!(!is_gzipped(Path::new("genome.fa")));
        assert!(!is_gzipped(Path::new("reads.fq")));
    }

    #[test]
    fn test_open_missing_file() {
        let result = open_buffered(Path::new("/nonexistent/genome.fa"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
