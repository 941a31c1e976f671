//! Phred+33 base quality decoding and summaries.

/// ASCII offset of Phred+33 encoded qualities (`!` is Q0)
pub const PHRED_OFFSET: u8 = b'!';

/// Number of bins in a quality histogram; higher scores land in the last bin
pub const HISTOGRAM_BINS: usize = 50;

/// Decode one Phred+33 quality character.
///
/// ```
/// use seqscan::parsing::quality::phred33_to_q;
///
/// assert_eq!(phred33_to_q(b'#'), 2);
/// assert_eq!(phred33_to_q(b'J'), 41);
/// ```
#[must_use]
pub fn phred33_to_q(symbol: u8) -> u8 {
    symbol.saturating_sub(PHRED_OFFSET)
}

/// Count how many bases carry each quality score
#[must_use]
pub fn quality_histogram(qualities: &[Vec<u8>]) -> [usize; HISTOGRAM_BINS] {
    let mut hist = [0usize; HISTOGRAM_BINS];
    for &symbol in qualities.iter().flatten() {
        let q = usize::from(phred33_to_q(symbol)).min(HISTOGRAM_BINS - 1);
        hist[q] += 1;
    }
    hist
}

/// Sum of quality scores at each read position (sequencing cycle) over all reads.
///
/// The result is as long as the longest read.
#[must_use]
pub fn per_position_totals(qualities: &[Vec<u8>]) -> Vec<u64> {
    let cycles = qualities.iter().map(Vec::len).max().unwrap_or(0);
    let mut totals = vec![0u64; cycles];
    for quality in qualities {
        for (total, &symbol) in totals.iter_mut().zip(quality) {
            *total += u64::from(phred33_to_q(symbol));
        }
    }
    totals
}

/// First position with the lowest total, and that total
#[must_use]
pub fn lowest_total_position(totals: &[u64]) -> Option<(usize, u64)> {
    totals
        .iter()
        .copied()
        .enumerate()
        .min_by_key(|&(i, total)| (total, i))
}
