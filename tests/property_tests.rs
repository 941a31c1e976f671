//! Randomized checks that independent algorithms agree on the same input.

use proptest::prelude::*;

use seqscan::assembly::{naive_overlap_map, overlap_map, GreedyAssembler};
use seqscan::index::{KmerIndex, SubsequenceIndex, SubstringIndex};
use seqscan::matching::{naive_match, naive_mismatch_match, BoyerMooreMatcher, PigeonholeMatcher};
use seqscan::Sequence;

fn dna(len: impl Into<prop::collection::SizeRange>) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"ACGT".to_vec()), len)
}

/// Includes `N`, so text symbols are often absent from the pattern
fn full_alphabet_dna(len: impl Into<prop::collection::SizeRange>) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"ACGTN".to_vec()), len)
}

/// Low-entropy text so that repeats and near-matches are common
fn repetitive_dna(len: impl Into<prop::collection::SizeRange>) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"AAC".to_vec()), len)
}

fn substitute(base: u8) -> u8 {
    match base {
        b'A' => b'C',
        b'C' => b'G',
        b'G' => b'T',
        _ => b'A',
    }
}

proptest! {
    #[test]
    fn boyer_moore_agrees_with_naive(text in repetitive_dna(0..120), pattern in repetitive_dna(1..8)) {
        let naive = naive_match(&pattern, &text);
        let bm = BoyerMooreMatcher::new(&pattern).find_all(&text);
        prop_assert_eq!(&bm.occurrences, &naive.occurrences);
        prop_assert!(bm.counters.alignments_tried <= naive.counters.alignments_tried);
    }

    #[test]
    fn boyer_moore_agrees_with_naive_over_full_alphabet(
        text in full_alphabet_dna(0..150),
        pattern in full_alphabet_dna(1..6),
    ) {
        let naive = naive_match(&pattern, &text);
        let bm = BoyerMooreMatcher::new(&pattern).find_all(&text);
        prop_assert_eq!(&bm.occurrences, &naive.occurrences);
        prop_assert!(bm.counters.alignments_tried <= naive.counters.alignments_tried);
    }

    #[test]
    fn boyer_moore_finds_planted_pattern(
        prefix in dna(0..40),
        pattern in dna(1..12),
        suffix in dna(0..40),
    ) {
        let text = [prefix.as_slice(), pattern.as_slice(), suffix.as_slice()].concat();
        let hits = BoyerMooreMatcher::new(&pattern).find_all(&text);
        prop_assert!(hits.occurrences.contains(&prefix.len()));
    }

    #[test]
    fn kmer_index_contains_every_offset(text in dna(1..80), k in 1usize..6) {
        let index = KmerIndex::new(&text, k).unwrap();
        for i in 0..text.len().saturating_sub(k - 1) {
            prop_assert!(index.query(&text[i..i + k]).contains(&i));
        }
    }

    #[test]
    fn kmer_pigeonhole_agrees_with_brute_force(
        text in repetitive_dna(0..150),
        pattern in repetitive_dna(12..20),
        d in 0usize..3,
    ) {
        let index = KmerIndex::new(&text, 3).unwrap();
        let hits = PigeonholeMatcher::new(&index, d).find_all(&pattern).unwrap();
        prop_assert_eq!(hits.occurrences, naive_mismatch_match(&pattern, &text, d).occurrences);
    }

    #[test]
    fn subsequence_pigeonhole_agrees_with_brute_force(
        text in repetitive_dna(0..150),
        pattern in repetitive_dna(12..20),
        d in 0usize..3,
    ) {
        // k=3, ival=3 spans 7 symbols; d + 7 <= 12
        let index = SubsequenceIndex::new(&text, 3, 3).unwrap();
        let hits = PigeonholeMatcher::new(&index, d).find_all(&pattern).unwrap();
        prop_assert_eq!(hits.occurrences, naive_mismatch_match(&pattern, &text, d).occurrences);
    }

    #[test]
    fn pigeonhole_finds_planted_substitutions(
        prefix in dna(0..40),
        pattern in dna(18..24),
        suffix in dna(0..40),
        positions in prop::collection::btree_set(0usize..18, 2),
    ) {
        let mut window = pattern.clone();
        for &p in &positions {
            window[p] = substitute(window[p]);
        }
        let text = [prefix.as_slice(), window.as_slice(), suffix.as_slice()].concat();

        let kmer = KmerIndex::new(&text, 4).unwrap();
        let subseq = SubsequenceIndex::new(&text, 4, 3).unwrap();
        let indexes: [&dyn SubstringIndex; 2] = [&kmer, &subseq];
        for index in indexes {
            let hits = PigeonholeMatcher::new(index, 2).find_all(&pattern).unwrap();
            prop_assert!(hits.occurrences.contains(&prefix.len()));
        }
    }

    #[test]
    fn kmer_overlap_map_agrees_with_naive(
        reads in prop::collection::vec(repetitive_dna(3..10), 0..8),
        k in 1usize..5,
    ) {
        let reads: Vec<Sequence> = reads.iter().map(|r| Sequence::new(r).unwrap()).collect();
        prop_assert_eq!(overlap_map(&reads, k), naive_overlap_map(&reads, k));
    }

    #[test]
    fn greedy_assembly_conserves_length(
        reads in prop::collection::vec(dna(3..10), 0..7),
        k in 1usize..4,
    ) {
        let reads: Vec<Sequence> = reads.iter().map(|r| Sequence::new(r).unwrap()).collect();
        let total: usize = reads.iter().map(|r| r.len()).sum();
        let count = reads.len();

        let assembly = GreedyAssembler::new(reads, k).assemble();
        prop_assert_eq!(assembly.sequence.len(), total - assembly.total_overlap());
        prop_assert!(assembly.merges.len() <= count.saturating_sub(1));
        prop_assert_eq!(assembly.contigs.len(), count - assembly.merges.len());
        prop_assert!(assembly.merges.iter().all(|m| m.overlap >= k));
    }
}
