//! Reference genome reader using noodles.
//!
//! Headers are skipped and every record's sequence is appended, in file
//! order, to a single uppercase [`Sequence`].
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::io::BufRead;
use std::path::Path;

use noodles::fasta;
use tracing::debug;

use crate::core::sequence::Sequence;
use crate::parsing::{open_buffered, ParseError};

/// Read a FASTA file into one concatenated genome sequence.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// if parsing fails, `ParseError::InvalidFormat` if no records are found, or
/// `ParseError::Sequence` if a symbol outside `ACGTN` occurs.
pub fn read_genome(path: &Path) -> Result<Sequence, ParseError> {
    let reader = open_buffered(path)?;
    let genome = read_genome_from(reader)?;
    debug!(path = %path.display(), length = genome.len(), "Read genome");
    Ok(genome)
}

/// Read a genome from any buffered FASTA source
///
/// # Errors
///
/// Same as [`read_genome`], minus file opening.
pub fn read_genome_from<R: BufRead>(reader: R) -> Result<Sequence, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut genome = Vec::new();
    let mut records = 0usize;

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;
        genome.extend_from_slice(record.sequence().as_ref());
        records += 1;
    }

    if records == 0 {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(Sequence::new(genome)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_genome_concatenates_records() {
        let fasta_content = b">chr1 description\nACGTACGT\nACGT\n>chr2\nggnn\n";

        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(fasta_content).unwrap();
        temp.flush().unwrap();

        let genome = read_genome(temp.path()).unwrap();
        assert_eq!(genome.as_bytes(), b"ACGTACGTACGTGGNN");
    }

    #[test]
    fn test_read_gzipped_genome() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">phix\nGAGTTTTATCGCTTCC\nATGACGCAG\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        temp.write_all(&compressed).unwrap();
        temp.flush().unwrap();

        let genome = read_genome(temp.path()).unwrap();
        assert_eq!(genome.to_string(), "GAGTTTTATCGCTTCCATGACGCAG");
    }

    #[test]
    fn test_read_empty_genome() {
        let result = read_genome_from(&b""[..]);
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_read_genome_rejects_unknown_symbols() {
        let result = read_genome_from(&b">chr1\nACGRT\n"[..]);
        assert!(matches!(result, Err(ParseError::Sequence(_))));
    }
}
