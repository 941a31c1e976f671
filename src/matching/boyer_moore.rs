//! Boyer-Moore exact matching with bad character and good suffix rules.
//!
//! The good suffix tables use the classic Gusfield construction:
//!
//! 1. **Z-array** of the reversed pattern gives the **N-array**: `N[j]` is the
//!    length of the longest suffix of `P[..=j]` that is also a suffix of `P`.
//! 2. **L'-array**: `L'[i]` is the largest end position (1-based) of a copy of
//!    the suffix `P[i..]` elsewhere in the pattern.
//! 3. **L-array**: running maximum of `L'`, used by the good suffix rule.
//! 4. **l'-array**: `l'[i]` is the length of the longest suffix of `P[i..]`
//!    that is also a prefix of `P`; it also drives the shift after a full match.
//!
//! The bad character table records, for every pattern position, the
//! rightmost earlier occurrence of each symbol that appears in the pattern.
//! Symbols absent from the pattern always produce the maximal shift.

use crate::core::types::{SearchHits, WorkCounters};

/// Z-array: `z[k]` is the length of the longest substring starting at `k`
/// that matches a prefix of `s` (`z[0] == s.len()`).
fn z_array(s: &[u8]) -> Vec<usize> {
    let n = s.len();
    let mut z = vec![0; n];
    if n == 0 {
        return z;
    }
    z[0] = n;
    if n == 1 {
        return z;
    }

    for i in 1..n {
        if s[i] == s[i - 1] {
            z[1] += 1;
        } else {
            break;
        }
    }

    // [l, r] is the rightmost z-box found so far
    let (mut l, mut r) = (0, 0);
    if z[1] > 0 {
        l = 1;
        r = z[1];
    }

    for k in 2..n {
        if k > r {
            for i in k..n {
                if s[i] == s[i - k] {
                    z[k] += 1;
                } else {
                    break;
                }
            }
            l = k;
            r = k + z[k] - 1;
        } else {
            let beta_len = r - k + 1;
            let z_prime = z[k - l];
            if beta_len > z_prime {
                z[k] = z_prime;
            } else {
                let mut extra = 0;
                for i in (r + 1)..n {
                    if s[i] == s[i - k] {
                        extra += 1;
                    } else {
                        break;
                    }
                }
                l = k;
                r += extra;
                z[k] = r - k + 1;
            }
        }
    }
    z
}

fn n_array(s: &[u8]) -> Vec<usize> {
    let reversed: Vec<u8> = s.iter().rev().copied().collect();
    let mut n = z_array(&reversed);
    n.reverse();
    n
}

fn big_l_prime_array(n: &[usize]) -> Vec<usize> {
    let m = n.len();
    let mut lp = vec![0; m];
    for j in 0..m.saturating_sub(1) {
        let i = m - n[j];
        if i < m {
            lp[i] = j + 1;
        }
    }
    lp
}

fn big_l_array(lp: &[usize]) -> Vec<usize> {
    let m = lp.len();
    let mut l = vec![0; m];
    if m < 2 {
        return l;
    }
    l[1] = lp[1];
    for i in 2..m {
        l[i] = l[i - 1].max(lp[i]);
    }
    l
}

fn small_l_prime_array(n: &[usize]) -> Vec<usize> {
    let m = n.len();
    let mut small_lp = vec![0; m];
    for i in 0..m {
        // prefix of length i+1 is also a suffix
        if n[i] == i + 1 {
            small_lp[m - i - 1] = i + 1;
        }
    }
    for i in (0..m.saturating_sub(1)).rev() {
        if small_lp[i] == 0 {
            small_lp[i] = small_lp[i + 1];
        }
    }
    small_lp
}

/// Preprocessed skip tables for one pattern. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct BoyerMooreTable {
    pattern_len: usize,

    /// Byte -> column in `bad_char` (1-based; 0 means the byte is not in the pattern)
    columns: [usize; 256],
    num_columns: usize,

    /// Row `i` holds, per column, 1 + the rightmost position `< i` of that
    /// symbol (0 when it does not occur before `i`)
    bad_char: Vec<usize>,

    big_l: Vec<usize>,
    small_l_prime: Vec<usize>,
}

impl BoyerMooreTable {
    #[must_use]
    pub fn new(pattern: &[u8]) -> Self {
        let mut columns = [0usize; 256];
        let mut num_columns = 0;
        for &b in pattern {
            if columns[usize::from(b)] == 0 {
                num_columns += 1;
                columns[usize::from(b)] = num_columns;
            }
        }

        let mut bad_char = Vec::with_capacity(pattern.len() * num_columns);
        let mut next = vec![0usize; num_columns];
        for (i, &b) in pattern.iter().enumerate() {
            bad_char.extend_from_slice(&next);
            next[columns[usize::from(b)] - 1] = i + 1;
        }

        let n = n_array(pattern);
        let big_l = big_l_array(&big_l_prime_array(&n));
        let small_l_prime = small_l_prime_array(&n);

        Self {
            pattern_len: pattern.len(),
            columns,
            num_columns,
            bad_char,
            big_l,
            small_l_prime,
        }
    }

    #[must_use]
    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    /// Shift proposed by the bad character rule after a mismatch at pattern
    /// position `i` against text symbol `c`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not a position of the pattern.
    #[must_use]
    pub fn bad_character_rule(&self, i: usize, c: u8) -> usize {
        assert!(i < self.pattern_len, "position {i} outside pattern");
        match self.columns[usize::from(c)] {
            0 => i + 1,
            col => i + 1 - self.bad_char[i * self.num_columns + col - 1],
        }
    }

    /// Shift proposed by the good suffix rule after a mismatch at pattern
    /// position `i` (so `P[i+1..]` matched).
    ///
    /// # Panics
    ///
    /// Panics if `i` is not a position of the pattern.
    #[must_use]
    pub fn good_suffix_rule(&self, i: usize) -> usize {
        let m = self.pattern_len;
        assert!(i < m, "position {i} outside pattern");
        if i == m - 1 {
            return 0;
        }
        // leftmost position of the matched suffix
        let i = i + 1;
        if self.big_l[i] > 0 {
            m - self.big_l[i]
        } else {
            m - self.small_l_prime[i]
        }
    }

    /// Shift after a full match, derived from the pattern's periodicity
    #[must_use]
    pub fn match_skip(&self) -> usize {
        if self.pattern_len < 2 {
            return 1;
        }
        self.pattern_len - self.small_l_prime[1]
    }
}

/// Boyer-Moore matcher owning the tables for its pattern
#[derive(Debug, Clone)]
pub struct BoyerMooreMatcher {
    pattern: Vec<u8>,
    table: BoyerMooreTable,
}

impl BoyerMooreMatcher {
    #[must_use]
    pub fn new(pattern: &[u8]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            table: BoyerMooreTable::new(pattern),
        }
    }

    #[must_use]
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    #[must_use]
    pub fn table(&self) -> &BoyerMooreTable {
        &self.table
    }

    /// Find all exact occurrences of the pattern in `text`.
    #[must_use]
    pub fn find_all(&self, text: &[u8]) -> SearchHits {
        let p = &self.pattern;
        let m = p.len();
        let n = text.len();
        let mut occurrences = Vec::new();
        let mut counters = WorkCounters::default();

        if m == 0 || m > n {
            return SearchHits::new(occurrences, counters);
        }

        let mut i = 0;
        while i + m <= n {
            counters.alignments_tried += 1;
            let mut shift = 1;
            let mut mismatched = false;
            for j in (0..m).rev() {
                counters.character_comparisons += 1;
                let c = text[i + j];
                if p[j] != c {
                    let skip_bc = self.table.bad_character_rule(j, c);
                    let skip_gs = self.table.good_suffix_rule(j);
                    shift = shift.max(skip_bc).max(skip_gs);
                    mismatched = true;
                    break;
                }
            }
            if !mismatched {
                occurrences.push(i);
                shift = shift.max(self.table.match_skip());
            }
            i += shift;
        }

        SearchHits::new(occurrences, counters)
    }
}
