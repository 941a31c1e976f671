//! FASTQ read set reader using noodles.

use std::io::BufRead;
use std::path::Path;

use noodles::fastq;
use tracing::debug;

use crate::core::sequence::Sequence;
use crate::parsing::quality::PHRED_OFFSET;
use crate::parsing::{open_buffered, ParseError};
use crate::utils::validation::check_read_limit;

/// Reads in file order, with their raw Phred+33 quality strings.
///
/// `sequences[i]` and `qualities[i]` belong to the same record and have the
/// same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadSet {
    pub sequences: Vec<Sequence>,
    pub qualities: Vec<Vec<u8>>,
}

impl ReadSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Number of distinct read sequences
    #[must_use]
    pub fn distinct_sequences(&self) -> usize {
        self.sequences
            .iter()
            .collect::<std::collections::HashSet<_>>()
            .len()
    }
}

/// Read all records of a FASTQ file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// if parsing fails, `ParseError::InvalidFormat` if the file holds no reads
/// or a record is malformed, or `ParseError::TooManyReads` past `MAX_READS`.
pub fn read_fastq(path: &Path) -> Result<ReadSet, ParseError> {
    let reader = open_buffered(path)?;
    let reads = read_fastq_from(reader)?;
    debug!(
        path = %path.display(),
        reads = reads.len(),
        distinct = reads.distinct_sequences(),
        "Read FASTQ"
    );
    Ok(reads)
}

/// Read all records from any buffered FASTQ source
///
/// # Errors
///
/// Same as [`read_fastq`], minus file opening.
pub fn read_fastq_from<R: BufRead>(reader: R) -> Result<ReadSet, ParseError> {
    let mut fastq_reader = fastq::io::Reader::new(reader);
    let mut reads = ReadSet::default();

    for result in fastq_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTQ record: {e}")))?;

        if check_read_limit(reads.len()).is_some() {
            return Err(ParseError::TooManyReads(reads.len()));
        }

        let n = reads.len() + 1;
        let sequence = Sequence::new(record.sequence())
            .map_err(|e| ParseError::InvalidFormat(format!("read {n}: {e}")))?;
        let quality = record.quality_scores();

        if quality.len() != sequence.len() {
            return Err(ParseError::InvalidFormat(format!(
                "read {n}: {} bases but {} quality scores",
                sequence.len(),
                quality.len()
            )));
        }
        if let Some(&bad) = quality.iter().find(|&&q| q < PHRED_OFFSET) {
            return Err(ParseError::InvalidFormat(format!(
                "read {n}: quality byte {bad} is below the Phred+33 offset"
            )));
        }

        reads.sequences.push(sequence);
        reads.qualities.push(quality.to_vec());
    }

    if reads.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No reads found in FASTQ file".to_string(),
        ));
    }

    Ok(reads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    const FASTQ: &[u8] = b"@read1\nACGGATC\n+\nIIIII##\n@read2\ngatcaagt\n+\n!!!!IIII\n@read3\nACGGATC\n+\nIIIIIII\n";

    #[test]
    fn test_read_fastq_file() {
        let mut temp = NamedTempFile::with_suffix(".fastq").unwrap();
        temp.write_all(FASTQ).unwrap();
        temp.flush().unwrap();

        let reads = read_fastq(temp.path()).unwrap();
        assert_eq!(reads.len(), 3);
        assert_eq!(reads.sequences[1].to_string(), "GATCAAGT");
        assert_eq!(reads.qualities[0], b"IIIII##".to_vec());
        assert_eq!(reads.distinct_sequences(), 2);
    }

    #[test]
    fn test_read_fastq_rejects_bad_bases() {
        let result = read_fastq_from(&b"@r\nACXT\n+\nIIII\n"[..]);
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_read_empty_fastq() {
        let result = read_fastq_from(&b""[..]);
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }
}
